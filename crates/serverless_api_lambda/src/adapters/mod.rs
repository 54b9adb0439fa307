pub mod context;
pub mod publish;
