// src/constants.rs
//
// Application-wide constants: remote endpoint, defaults and host identifiers.

/// Base URL of the Cubox service.
///
/// Used in: `infrastructure/cubox.rs`
pub const CUBOX_BASE_URL: &str = "https://cubox.pro";

/// Path prefix of the save endpoint; the API key is appended as the last segment.
///
/// Used in: `infrastructure/cubox.rs`
pub const SAVE_PATH: &str = "/c/api/save";

/// Value of the `type` field for every saved entry.
pub const MEMO_TYPE: &str = "memo";

/// Default value of the `defaultTags` setting.
pub const DEFAULT_TAGS: &str = "Obsidian";

/// Error text when the remote rejects a save without a message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Id of the share command registered on load.
///
/// Used in: `application/plugin.rs`, `lib.rs`
pub const SHARE_COMMAND_ID: &str = "share-this";

/// Icon name of the ribbon trigger.
pub const SHARE_RIBBON_ICON: &str = "share";

/// Settings document file name inside the data directory.
///
/// Used in: `infrastructure/terminal_host.rs`
pub const SETTINGS_FILE_NAME: &str = "data.json";

/// Directory name under the user's config directory.
pub const APP_DIR_NAME: &str = "cubox-share";
