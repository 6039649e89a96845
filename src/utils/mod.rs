/// Content fingerprinting for change detection.
pub mod hash;

/// Path helpers shared by the mirror engine and the config actions.
pub mod paths;
