//! Network primitives shared by the scanner and the Wake-on-LAN sender.

pub mod interface;
pub mod mac;
pub mod range;
