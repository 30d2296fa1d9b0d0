//! Native Currency Transfer Use Cases

mod send_ether;

pub use send_ether::{EtherTransfer, SendEtherUseCase};
