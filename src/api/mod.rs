//! Request/response surface of the engine.
//!
//! Transport-independent: `GameService` takes and returns plain serde
//! payloads. The HTTP server in `server` is one caller.

pub mod protocol;
pub mod service;

pub use protocol::{
    CalculateFinalRequest, CompareRequest, ErrorBody, FinalResult, NewGameRequest,
    PlayRoundResponse, RoundRecord,
};
pub use service::GameService;
