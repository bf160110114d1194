pub mod account;
pub mod authorizer;
pub mod card;
pub mod payment;
pub mod ports;
