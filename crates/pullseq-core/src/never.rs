/// Uninhabited error type. `Step<T>` defaults its error parameter to it, so
/// infallible sources carry no reachable failure variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Never {}

impl Never {
    pub fn never<T>(self) -> T {
        match self {}
    }
}

impl std::fmt::Display for Never {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {}
    }
}

impl std::error::Error for Never {}
