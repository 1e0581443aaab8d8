//! Well-known IBGE federative unit codes.
//!
//! The first two digits of an AIH number are the IBGE code of the state
//! (or the Federal District) that issued it.
//!
//! # Examples
//!
//! ```
//! use aih_types::well_known;
//!
//! assert_eq!(well_known::PE, 26);
//! assert_eq!(well_known::uf_abbreviation(35), Some("SP"));
//! assert_eq!(well_known::uf_abbreviation(10), None);
//! ```

// =============================================================================
// North
// =============================================================================

/// Rondônia - 11.
pub const RO: u8 = 11;
/// Acre - 12.
pub const AC: u8 = 12;
/// Amazonas - 13.
pub const AM: u8 = 13;
/// Roraima - 14.
pub const RR: u8 = 14;
/// Pará - 15.
pub const PA: u8 = 15;
/// Amapá - 16.
pub const AP: u8 = 16;
/// Tocantins - 17.
pub const TO: u8 = 17;

// =============================================================================
// Northeast
// =============================================================================

/// Maranhão - 21.
pub const MA: u8 = 21;
/// Piauí - 22.
pub const PI: u8 = 22;
/// Ceará - 23.
pub const CE: u8 = 23;
/// Rio Grande do Norte - 24.
pub const RN: u8 = 24;
/// Paraíba - 25.
pub const PB: u8 = 25;
/// Pernambuco - 26.
pub const PE: u8 = 26;
/// Alagoas - 27.
pub const AL: u8 = 27;
/// Sergipe - 28.
pub const SE: u8 = 28;
/// Bahia - 29.
pub const BA: u8 = 29;

// =============================================================================
// Southeast
// =============================================================================

/// Minas Gerais - 31.
pub const MG: u8 = 31;
/// Espírito Santo - 32.
pub const ES: u8 = 32;
/// Rio de Janeiro - 33.
pub const RJ: u8 = 33;
/// São Paulo - 35.
pub const SP: u8 = 35;

// =============================================================================
// South
// =============================================================================

/// Paraná - 41.
pub const PR: u8 = 41;
/// Santa Catarina - 42.
pub const SC: u8 = 42;
/// Rio Grande do Sul - 43.
pub const RS: u8 = 43;

// =============================================================================
// Center-West
// =============================================================================

/// Mato Grosso do Sul - 50.
pub const MS: u8 = 50;
/// Mato Grosso - 51.
pub const MT: u8 = 51;
/// Goiás - 52.
pub const GO: u8 = 52;
/// Distrito Federal - 53.
pub const DF: u8 = 53;

/// Every federative unit as `(code, abbreviation)`, ordered by code.
pub const ALL_UF: &[(u8, &str)] = &[
    (RO, "RO"),
    (AC, "AC"),
    (AM, "AM"),
    (RR, "RR"),
    (PA, "PA"),
    (AP, "AP"),
    (TO, "TO"),
    (MA, "MA"),
    (PI, "PI"),
    (CE, "CE"),
    (RN, "RN"),
    (PB, "PB"),
    (PE, "PE"),
    (AL, "AL"),
    (SE, "SE"),
    (BA, "BA"),
    (MG, "MG"),
    (ES, "ES"),
    (RJ, "RJ"),
    (SP, "SP"),
    (PR, "PR"),
    (SC, "SC"),
    (RS, "RS"),
    (MS, "MS"),
    (MT, "MT"),
    (GO, "GO"),
    (DF, "DF"),
];

/// Returns the abbreviation of the federative unit with this IBGE code.
pub fn uf_abbreviation(code: u8) -> Option<&'static str> {
    ALL_UF
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|i| ALL_UF[i].1)
}

/// Returns true if the code belongs to a federative unit.
pub fn is_known_uf(code: u8) -> bool {
    uf_abbreviation(code).is_some()
}
