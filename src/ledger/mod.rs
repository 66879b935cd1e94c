pub mod balancer;

pub use balancer::{opening_balance_for, post_delta, rechain};
