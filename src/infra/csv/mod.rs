pub mod reader;
pub mod writer;

/// Canonical organogram CSV header, exact names and export order.
pub const HEADERS: [&str; 13] = [
    "id",
    "parentId",
    "title",
    "acronym",
    "institution",
    "country",
    "picture",
    "pi",
    "type",
    "link",
    "bio",
    "expertise",
    "role",
];
