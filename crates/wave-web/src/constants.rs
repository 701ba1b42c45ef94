// DOM binding constants for the web front-end

// Elements that make up the chain, in order; the first one leads
pub const DEFAULT_SELECTOR: &str = ".wave-image";

// Optional override on <body>, e.g. data-wave-selector=".trail img"
pub const SELECTOR_ATTRIBUTE: &str = "data-wave-selector";
