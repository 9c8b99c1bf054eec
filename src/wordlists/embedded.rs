//! Embedded word-set catalogs
//!
//! Catalogs compiled into the binary at build time.

// Include generated catalogs from build script
include!(concat!(env!("OUT_DIR"), "/daily.rs"));
include!(concat!(env!("OUT_DIR"), "/nature.rs"));
include!(concat!(env!("OUT_DIR"), "/daily_life.rs"));
include!(concat!(env!("OUT_DIR"), "/objects.rs"));
