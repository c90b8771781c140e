//! Domain layer constants
//!
//! Constants that are part of the wire contract with the backend daemons or
//! of the result-shaping rules. Deployment defaults (socket paths, ports)
//! live in `psw_infrastructure::constants`.

// ============================================================================
// PAGINATION CONSTANTS
// ============================================================================

/// Hits requested per result page
pub const SEARCH_PAGE_SIZE: u32 = 20;

/// Highest page count the UI can paginate to
pub const SEARCH_MAX_PAGES: u32 = 30;

// ============================================================================
// SCOPE CONSTANTS
// ============================================================================

/// Lowest byte a scope bound may carry after the directory prefix
pub const SCOPE_LOWER_SENTINEL: char = '\u{01}';

/// Highest byte a scope bound may carry after the directory prefix
pub const SCOPE_UPPER_SENTINEL: char = '\u{7f}';

/// Service selector used when the request names none
pub const DEFAULT_SERVICE: &str = "all";

// ============================================================================
// FILE NAMING CONSTANTS
// ============================================================================

/// Suffix the indexer appends to every capture it has indexed
pub const INDEX_FILE_SUFFIX: &str = ".ap";

/// Capture file extension stripped when synthesizing slice file names
pub const CAPTURE_FILE_EXTENSION: &str = ".cap";

// ============================================================================
// CONTENT TYPE CONSTANTS
// ============================================================================

/// Content type of raw capture files and pcap slices
pub const PCAP_CONTENT_TYPE: &str = "application/vnd.tcpdump.pcap";

/// Content type of textual renderings
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Content type of generated replay scripts
pub const PYTHON_CONTENT_TYPE: &str = "text/x-python; charset=utf-8";

// ============================================================================
// WIRE DELIMITERS
// ============================================================================

/// Field separator inside socket request frames
pub const FRAME_FIELD_SEPARATOR: char = '\0';

/// Field separator inside response lines and subprocess request lines
pub const LINE_FIELD_SEPARATOR: char = '\t';

/// [`LINE_FIELD_SEPARATOR`] as a byte, for splitting raw responses
pub const LINE_FIELD_SEPARATOR_BYTE: u8 = b'\t';

/// Render kind name the slicer accepts for location lookups
pub const SLICER_LOCATE_KIND: &str = "loc";
