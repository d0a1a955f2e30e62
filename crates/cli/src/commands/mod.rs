pub mod demo;
pub mod pack;
pub mod unpack;
