use std::marker::PhantomData;

use smallvec::SmallVec;

pub trait Player {
    type Id;

    fn id(&self) -> Self::Id;
}

pub trait PlayerQueue {
    type Id: PartialEq;
    type Item: Player<Id = Self::Id>;

    fn as_slice(&self) -> &[Self::Item];

    fn get_current(&self) -> &Self::Item;

    fn next(&mut self) -> &Self::Item;

    fn rewind(&mut self);

    fn find(&self, id: Self::Id) -> Option<&Self::Item> {
        self.as_slice().iter().find(|player| player.id() == id)
    }
}

/// Non-empty cyclic queue of players, the first player is current after construction.
#[derive(Debug)]
pub struct PlayerDataQueue<T, ID> {
    players: SmallVec<[T; 2]>,
    current: usize,
    _phantom_data: PhantomData<ID>,
}

impl<T, ID> PlayerDataQueue<T, ID> {
    /// Returns [`None`] if `players` is empty.
    pub fn new(players: Vec<T>) -> Option<Self> {
        if players.is_empty() {
            return None;
        }
        Some(Self {
            players: SmallVec::from_vec(players),
            current: 0,
            _phantom_data: Default::default(),
        })
    }
}

impl<T: Player<Id = ID>, ID: PartialEq> PlayerQueue for PlayerDataQueue<T, ID> {
    type Id = ID;
    type Item = T;

    fn as_slice(&self) -> &[T] {
        self.players.as_slice()
    }

    /// Get the current element without advancing the queue
    fn get_current(&self) -> &T {
        &self.players[self.current]
    }

    /// Advance the queue by one and return the new current element
    fn next(&mut self) -> &T {
        self.current = (self.current + 1) % self.players.len();
        &self.players[self.current]
    }

    /// Make the first element current again
    fn rewind(&mut self) {
        self.current = 0;
    }
}
