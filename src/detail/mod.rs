pub(crate) mod cursor;

pub(crate) use cursor::PeekCursor;

/// Where a [`PeekableReader`](crate::PeekableReader) is in its life.
///
/// ```text
///   Fresh --peek--> Peeked --read--> PeekedThenReading(Some) --drained--> PeekedThenReading(None)
///     |
///     +---read----> Reading
/// ```
///
/// Peeking is only legal from `Fresh`; every other state rejects it.
#[derive(Debug)]
pub(crate) enum State {
    Fresh,
    Peeked(PeekCursor),
    PeekedThenReading(Option<PeekCursor>),
    Reading,
}

impl State {
    pub fn has_peeked(&self) -> bool {
        matches!(self, State::Peeked(_) | State::PeekedThenReading(_))
    }

    pub fn has_started_reading(&self) -> bool {
        matches!(self, State::PeekedThenReading(_) | State::Reading)
    }

    /// The peek buffer if it still holds unread data.
    pub fn cursor(&self) -> Option<&PeekCursor> {
        match self {
            State::Peeked(c) | State::PeekedThenReading(Some(c)) => Some(c),
            _ => None,
        }
    }

    /// Moves into a reading state, keeping any peeked data, and returns the active cursor.
    pub fn start_reading(&mut self) -> Option<&mut PeekCursor> {
        let prev = std::mem::replace(self, State::Reading);
        *self = match prev {
            State::Fresh | State::Reading => State::Reading,
            State::Peeked(c) => State::PeekedThenReading(Some(c)),
            State::PeekedThenReading(c) => State::PeekedThenReading(c),
        };
        match self {
            State::PeekedThenReading(Some(c)) => Some(c),
            _ => None,
        }
    }

    /// Discards the peek buffer once it has been fully served.
    pub fn release_cursor(&mut self) {
        if let State::PeekedThenReading(c) = self {
            *c = None;
        }
    }
}
