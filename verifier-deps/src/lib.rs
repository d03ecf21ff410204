//! Empty crate that exists only to pin transitive dependency versions for
//! verifiable builds.
