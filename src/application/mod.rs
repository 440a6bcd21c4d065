pub mod catalog;
pub mod metrics;
pub mod resolvers;
