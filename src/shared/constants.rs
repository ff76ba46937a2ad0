/// Page size applied when a list request does not specify one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Hard ceiling for client-requested page sizes
pub const MAX_PAGE_SIZE: i64 = 100;
