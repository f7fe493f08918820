use std::sync::mpsc::{channel, Receiver, Sender};

use tracing::{debug, info, warn};

use super::player_pool::{PlayerDataQueue, PlayerQueue};
use super::{
    is_winning_move, Board, FinishedState, GameError, GameEvent, GameResult, GameState, Player,
    Token,
};

/// Runs a single game: applies moves, detects the outcome and keeps turn order.
#[derive(Debug)]
pub struct Controller {
    board: Board,
    players: PlayerDataQueue<Player, Token>,
    state: GameState,
    round_count: u32,
    subscribers: Vec<Sender<GameEvent>>,
}

impl Controller {
    /// Creates a game for two named players, the first one moves first with [`Token::One`].
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> GameResult<Self> {
        Self::with_players(
            Player::new(player_one, Token::One),
            Player::new(player_two, Token::Two),
        )
    }

    pub fn with_players(first: Player, second: Player) -> GameResult<Self> {
        if first.token() == second.token() {
            return Err(GameError::DuplicateToken(first.token()));
        }
        let players =
            PlayerDataQueue::new(vec![first, second]).ok_or(GameError::PlayerPoolCorrupted)?;
        Ok(Self {
            board: Board::new(),
            players,
            state: GameState::InProgress,
            round_count: 1,
            subscribers: Vec::new(),
        })
    }

    /// Marks `(row, col)` for the active player and advances the game.
    ///
    /// Picking an occupied tile is ignored: the state is returned unchanged and
    /// the same player stays active.
    pub fn play_round(&mut self, row: usize, col: usize) -> GameResult<GameState> {
        if self.is_finished() {
            return Err(GameError::GameAlreadyOver);
        }

        let token = self.active_player().token();
        if !self.board.mark(row, col, token)? {
            debug!(row, col, "tile is occupied, move ignored");
            return Ok(self.state.clone());
        }
        self.round_count += 1;

        if is_winning_move(row, col, &self.board, self.active_player()) {
            let winner = self.active_player().clone();
            return Ok(self.set_winner(winner));
        }
        if self.board.is_full() {
            return Ok(self.set_draw());
        }
        Ok(self.switch_player())
    }

    /// Starts a new game with the same players and subscribers.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.players.rewind();
        self.round_count = 1;
        self.state = GameState::InProgress;
        info!("game reset, {}'s turn", self.active_player().name());
    }

    /// Registers a listener for [`GameEvent`]s.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (sender, receiver) = channel();
        self.subscribers.push(sender);
        receiver
    }

    pub fn active_player(&self) -> &Player {
        self.players.get_current()
    }

    pub fn players(&self) -> &[Player] {
        self.players.as_slice()
    }

    pub fn player_by_token(&self, token: Token) -> Option<&Player> {
        self.players.find(token)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    fn set_winner(&mut self, player: Player) -> GameState {
        info!(round = self.round_count, "{} won\n{}", player, self.board);
        self.finish(FinishedState::Won(player))
    }

    fn set_draw(&mut self) -> GameState {
        info!(round = self.round_count, "draw\n{}", self.board);
        self.finish(FinishedState::Draw)
    }

    fn finish(&mut self, outcome: FinishedState) -> GameState {
        self.state = GameState::Finished(outcome.clone());
        self.notify(GameEvent::GameEnded(outcome));
        self.state.clone()
    }

    fn switch_player(&mut self) -> GameState {
        let next = self.players.next();
        debug!(round = self.round_count, "{}'s turn\n{}", next.name(), self.board);
        self.state.clone()
    }

    fn notify(&mut self, event: GameEvent) {
        self.subscribers
            .retain(|subscriber| match subscriber.send(event.clone()) {
                Ok(()) => true,
                Err(err) => {
                    warn!("dropping game event subscriber: {}", err);
                    false
                }
            });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn new_game() -> Controller {
        Controller::new("Ann", "Bob").unwrap()
    }

    fn play_all(controller: &mut Controller, moves: &[(usize, usize)]) -> GameState {
        let mut state = controller.state().clone();
        for &(row, col) in moves {
            state = controller.play_round(row, col).unwrap();
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let controller = new_game();
        assert_eq!(controller.state(), &GameState::InProgress);
        assert_eq!(controller.active_player(), &Player::new("Ann", Token::One));
        assert_eq!(controller.round_count(), 1);
        assert_eq!(controller.board().values(), [[0; 3]; 3]);
        itertools::assert_equal(
            controller.players().iter().map(Player::name),
            ["Ann", "Bob"],
        );
    }

    #[test]
    fn test_duplicate_token() {
        let result = Controller::with_players(
            Player::new("Ann", Token::Two),
            Player::new("Bob", Token::Two),
        );
        assert_eq!(result.unwrap_err(), GameError::DuplicateToken(Token::Two));
    }

    #[test]
    fn test_players_alternate() {
        let mut controller = new_game();
        let mut seen = Vec::new();
        for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 1)] {
            seen.push(controller.active_player().token());
            assert_eq!(controller.play_round(row, col), Ok(GameState::InProgress));
        }
        assert_eq!(seen, [Token::One, Token::Two, Token::One, Token::Two]);
        assert_eq!(controller.active_player().token(), Token::One);
        assert_eq!(controller.round_count(), 5);
        assert_eq!(controller.board().values(), [[1, 2, 0], [0, 2, 0], [0, 0, 1]]);
    }

    #[test]
    fn test_occupied_tile_is_ignored() {
        let mut controller = new_game();
        controller.play_round(1, 1).unwrap();
        assert_eq!(controller.play_round(1, 1), Ok(GameState::InProgress));
        assert_eq!(controller.active_player().token(), Token::Two);
        assert_eq!(controller.round_count(), 2);
        assert_eq!(controller.board().tile(1, 1).unwrap().value(), 1);
    }

    #[test]
    fn test_invalid_coordinate() {
        let mut controller = new_game();
        assert_eq!(
            controller.play_round(0, 3),
            Err(GameError::invalid_coordinate(0, 3))
        );
        assert_eq!(controller.active_player().token(), Token::One);
        assert_eq!(controller.round_count(), 1);
    }

    #[test]
    fn test_win_locks_the_game() {
        let mut controller = new_game();
        let state = play_all(&mut controller, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let ann = Player::new("Ann", Token::One);
        assert_eq!(state, GameState::Finished(FinishedState::Won(ann.clone())));
        // the winner stays active
        assert_eq!(controller.active_player(), &ann);
        assert_eq!(controller.round_count(), 6);

        assert_eq!(controller.play_round(2, 2), Err(GameError::GameAlreadyOver));
        assert_eq!(controller.board().tile(2, 2).unwrap().value(), 0);
    }

    #[test]
    fn test_draw_locks_the_game() {
        let mut controller = new_game();
        let state = play_all(
            &mut controller,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (1, 0),
                (1, 2),
                (2, 1),
                (2, 0),
                (2, 2),
            ],
        );
        assert_eq!(state, GameState::Finished(FinishedState::Draw));
        assert!(controller.is_finished());
        assert_eq!(controller.play_round(0, 0), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_win_on_last_tile_is_not_a_draw() {
        let mut controller = new_game();
        // X O X
        // O X O
        // O X X  <- the last X fills the board and completes the main diagonal
        let state = play_all(
            &mut controller,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 1),
                (2, 0),
            ],
        );
        assert_eq!(state, GameState::InProgress);
        let last = controller.play_round(2, 2).unwrap();
        assert!(controller.board().is_full());
        assert_eq!(
            last,
            GameState::Finished(FinishedState::Won(Player::new("Ann", Token::One)))
        );
    }

    #[test]
    fn test_game_end_is_pushed_once() {
        let mut controller = new_game();
        let events = controller.subscribe();
        let dropped = controller.subscribe();
        drop(dropped);

        play_all(&mut controller, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert!(events.try_recv().is_err());

        controller.play_round(0, 2).unwrap();
        let _ = controller.play_round(2, 2);
        itertools::assert_equal(
            events.try_iter(),
            [GameEvent::GameEnded(FinishedState::Won(Player::new(
                "Ann",
                Token::One,
            )))],
        );
    }

    #[test]
    fn test_reset() {
        let mut controller = new_game();
        let events = controller.subscribe();
        play_all(&mut controller, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(controller.is_finished());

        controller.reset();
        assert_eq!(controller.state(), &GameState::InProgress);
        assert_eq!(controller.active_player().token(), Token::One);
        assert_eq!(controller.round_count(), 1);
        assert_eq!(controller.board().values(), [[0; 3]; 3]);
        assert_eq!(
            controller.player_by_token(Token::Two).map(Player::name),
            Some("Bob")
        );

        // subscribers survive a reset
        play_all(&mut controller, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(events.try_iter().count(), 2);
    }
}
