//! Database schema definitions

/// SQL to create the categories table
pub const CREATE_CATEGORY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Category (
    ID              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT
)
"#;

/// SQL to create the items table
pub const CREATE_ITEM_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Item (
    ID              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT,
    categoryID      INTEGER,
    quantity        INTEGER,
    note            TEXT,
    FOREIGN KEY (categoryID) REFERENCES Category(ID)
)
"#;

/// Index to accelerate filtering items by category
pub const CREATE_ITEM_CATEGORY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_item_categoryid ON Item (categoryID)";

/// Index on the category primary key
pub const CREATE_CATEGORY_ID_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_category_id ON Category (ID)";

/// Index to accelerate category lookup by name
pub const CREATE_CATEGORY_NAME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_category_name ON Category (name)";

/// All schema statements in creation order
pub const CREATE_ALL: &[&str] = &[
    CREATE_CATEGORY_TABLE,
    CREATE_ITEM_TABLE,
    CREATE_ITEM_CATEGORY_INDEX,
    CREATE_CATEGORY_ID_INDEX,
    CREATE_CATEGORY_NAME_INDEX,
];
