//! Compile-time settings. The tracker has no runtime configuration.

/// `localStorage` key holding the JSON array of bets.
pub const STORAGE_KEY: &str = "bets";

pub const CURRENCY_PREFIX: &str = "S/";
pub const MULTIPLIER_PREFIX: &str = "x";

/// Shown in place of an amount or multiplier that no longer parses.
pub const MISSING_VALUE: &str = "—";

pub const APP_TITLE: &str = "SIMPLE BET TRACKER";

// Form placeholders
pub const TITLE_PLACEHOLDER: &str = "Nombre de apuesta";
pub const NAME_PLACEHOLDER: &str = "Nombre";
pub const AMOUNT_PLACEHOLDER: &str = "Monto";
pub const MULTIPLIER_PLACEHOLDER: &str = "Cuota";

// Button labels
pub const ADD_LABEL: &str = "Añadir";
pub const CLEAR_ALL_LABEL: &str = "Borrar todo";
pub const EDIT_LABEL: &str = "Editar";
pub const SAVE_LABEL: &str = "Save";
pub const DELETE_LABEL: &str = "Borrar";
