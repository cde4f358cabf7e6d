//! Embedded word list
//!
//! Database terms compiled into the binary.

/// Database terms the game draws its secret words from
pub const DATABASE_TERMS: &[&str] = &[
    "DATABASE",
    "SQL",
    "MYSQL",
    "POSTGRESQL",
    "MONGODB",
    "ORACLE",
    "TABLA",
    "CONSULTA",
    "INDICE",
    "TRANSACCION",
];

/// Number of words in `DATABASE_TERMS`
pub const DATABASE_TERMS_COUNT: usize = 10;
