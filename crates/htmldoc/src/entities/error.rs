//! Character reference diagnostics.
//!
//! Errors never stop decoding; they are handed to an [`EntityErrorSink`] while the
//! decoder emits its best-effort substitution.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityErrorCode {
    MissingSemicolonAfterCharacterReference,
    AbsenceOfDigitsInNumericCharacterReference,
    NullCharacterReference,
    CharacterReferenceOutsideUnicodeRange,
    SurrogateCharacterReference,
    NoncharacterCharacterReference,
    ControlCharacterReference,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityError {
    pub code: EntityErrorCode,
    /// Characters of the reference consumed so far, counted from the `&`.
    pub consumed: usize,
}

/// Observer for character reference errors.
pub trait EntityErrorSink {
    fn report(&mut self, error: EntityError);
}

/// Discards every error.
impl EntityErrorSink for () {
    fn report(&mut self, _error: EntityError) {}
}

impl EntityErrorSink for Vec<EntityError> {
    fn report(&mut self, error: EntityError) {
        self.push(error);
    }
}

impl<S: EntityErrorSink + ?Sized> EntityErrorSink for &mut S {
    fn report(&mut self, error: EntityError) {
        (**self).report(error);
    }
}
