pub mod autofill;
pub mod patient;
pub mod response;
pub mod result;
pub mod scale;
pub mod score;
