pub mod gateway;
pub mod sequence;

pub use gateway::GatewayClient;
pub use sequence::OrderSequence;
