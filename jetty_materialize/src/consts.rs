/// Catalog id of the PUBLIC pseudo-role.
pub const PUBLIC_ROLE_ID: &str = "p";
/// SQL keyword for the PUBLIC pseudo-role.
pub const PUBLIC: &str = "PUBLIC";
/// Separates the fields of a composite grant key.
pub const KEY_DELIMITER: char = '|';
/// Separates a region tag from the identifier it qualifies.
pub const REGION_DELIMITER: char = ':';
