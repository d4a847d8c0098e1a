pub mod mocks;
pub mod web_server_simulator;
