//! Territory catalog: codes, parents, aliases and preferred scripts.
//!
//! The catalog is static data supplied next to the binary data model.
//! Its entry order defines territory numbers, which index the model's
//! first-record table. Territories are ordered from the most specific
//! (small territories, subdivisions) to the international territory,
//! which is always last.

use std::fmt;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::alphabet::Alphabet;
use crate::error::CatalogError;

/// Code of the international territory.
pub const INTERNATIONAL_CODE: &str = "AAA";

/// Index of a territory in the catalog and in the data model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TerritoryId(pub u16);

impl TerritoryId {
    /// The id as a `usize` index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog line before parent codes are resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Full code, e.g. `NLD` or `US-CA`.
    pub code: String,
    /// Full code of the parent territory, for subdivisions.
    pub parent: Option<String>,
    /// Preferred scripts, most preferred first. Empty means Roman only.
    pub alphabets: Vec<Alphabet>,
    /// Alternative full codes.
    pub aliases: Vec<String>,
    /// See [`TerritoryInfo::long_code_length`].
    pub long_code_length: Option<u8>,
}

impl CatalogEntry {
    /// An entry with only a code and the Roman alphabet.
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            parent: None,
            alphabets: vec![Alphabet::Roman],
            aliases: Vec::new(),
            long_code_length: None,
        }
    }

    /// Set the parent code.
    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    /// Add an alias.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Set the preferred alphabets.
    pub fn with_alphabets(mut self, alphabets: &[Alphabet]) -> Self {
        self.alphabets = alphabets.to_vec();
        self
    }

    /// Set the long-code length for a parent territory.
    pub fn with_long_code_length(mut self, len: u8) -> Self {
        self.long_code_length = Some(len);
        self
    }
}

/// A resolved territory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerritoryInfo {
    /// Full code, e.g. `NLD` or `US-CA`.
    pub code: String,
    /// Parent territory, for subdivisions.
    pub parent: Option<TerritoryId>,
    /// Preferred scripts, most preferred first.
    pub alphabets: SmallVec<[Alphabet; 2]>,
    /// Alternative full codes.
    pub aliases: Vec<String>,
    /// For a parent territory: mapcodes of at least this many characters
    /// (dot excluded) given under one of its subdivisions are decoded
    /// under the parent instead.
    pub long_code_length: Option<u8>,
}

impl TerritoryInfo {
    /// The part after the `-` for subdivisions (`CA` for `US-CA`), the full
    /// code otherwise.
    pub fn short_code(&self) -> &str {
        match self.code.split_once('-') {
            Some((_, short)) => short,
            None => &self.code,
        }
    }

    /// Whether this territory has a parent.
    pub fn is_subdivision(&self) -> bool {
        self.parent.is_some()
    }
}

/// The full set of territories.
#[derive(Clone, Debug)]
pub struct TerritoryCatalog {
    territories: Vec<TerritoryInfo>,
    names: IndexMap<String, TerritoryId>,
    short_names: IndexMap<String, SmallVec<[TerritoryId; 2]>>,
    international: TerritoryId,
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_uppercase().replace('_', "-")
}

impl TerritoryCatalog {
    /// Resolve parents and build the lookup tables.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.len() > u16::MAX as usize {
            return Err(CatalogError::TooManyTerritories {
                count: entries.len(),
            });
        }
        match entries.last() {
            Some(last) if normalize(&last.code) == INTERNATIONAL_CODE => {}
            _ => return Err(CatalogError::MissingInternational),
        }

        let mut names: IndexMap<String, TerritoryId> = IndexMap::with_capacity(entries.len());
        for (i, e) in entries.iter().enumerate() {
            let id = TerritoryId(i as u16);
            for name in std::iter::once(&e.code).chain(e.aliases.iter()) {
                let key = normalize(name);
                if names.insert(key.clone(), id).is_some() {
                    return Err(CatalogError::DuplicateName { name: key });
                }
            }
        }

        let mut territories = Vec::with_capacity(entries.len());
        for e in &entries {
            let parent = match &e.parent {
                None => None,
                Some(p) => {
                    let key = normalize(p);
                    let pid = names
                        .get(&key)
                        .copied()
                        .ok_or_else(|| CatalogError::UnknownParent {
                            territory: e.code.clone(),
                            parent: p.clone(),
                        })?;
                    if entries[pid.index()].parent.is_some() || normalize(&e.code) == key {
                        return Err(CatalogError::NestedSubdivision {
                            territory: e.code.clone(),
                        });
                    }
                    Some(pid)
                }
            };
            let mut alphabets: SmallVec<[Alphabet; 2]> = e.alphabets.iter().copied().collect();
            if alphabets.is_empty() {
                alphabets.push(Alphabet::Roman);
            }
            territories.push(TerritoryInfo {
                code: normalize(&e.code),
                parent,
                alphabets,
                aliases: e.aliases.iter().map(|a| normalize(a)).collect(),
                long_code_length: e.long_code_length,
            });
        }

        let mut short_names: IndexMap<String, SmallVec<[TerritoryId; 2]>> = IndexMap::new();
        for (i, t) in territories.iter().enumerate() {
            if t.is_subdivision() {
                short_names
                    .entry(t.short_code().to_string())
                    .or_default()
                    .push(TerritoryId(i as u16));
            }
        }

        let international = TerritoryId((territories.len() - 1) as u16);
        Ok(Self {
            territories,
            names,
            short_names,
            international,
        })
    }

    /// Parse the line-oriented catalog format.
    ///
    /// Each non-comment line holds up to five whitespace-separated columns:
    /// `code parent alphabets aliases long-code-length`. Lists are
    /// comma-separated and `-` stands for "none". Only `code` is required.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut entries = Vec::new();
        for (n, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let malformed = |reason: String| CatalogError::MalformedLine {
                line: n + 1,
                reason,
            };
            let cols: Vec<&str> = line.split_whitespace().collect();
            if cols.len() > 5 {
                return Err(malformed(format!("expected at most 5 columns, got {}", cols.len())));
            }
            let col = |i: usize| cols.get(i).copied().filter(|c| *c != "-");

            let code = cols[0];
            if !is_valid_code(code) {
                return Err(malformed(format!("invalid territory code '{code}'")));
            }
            let mut entry = CatalogEntry::new(code);
            entry.parent = col(1).map(str::to_string);
            if let Some(list) = col(2) {
                entry.alphabets = list
                    .split(',')
                    .map(|a| a.parse::<Alphabet>())
                    .collect::<Result<_, _>>()
                    .map_err(|e| malformed(e.to_string()))?;
            }
            if let Some(list) = col(3) {
                entry.aliases = list.split(',').map(str::to_string).collect();
            }
            if let Some(len) = col(4) {
                entry.long_code_length = Some(
                    len.parse::<u8>()
                        .map_err(|e| malformed(format!("invalid long-code length '{len}': {e}")))?,
                );
            }
            entries.push(entry);
        }
        Self::from_entries(entries)
    }

    /// Number of territories.
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Whether the catalog is empty. Never true for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Territory details. Panics on an id from another catalog.
    pub fn get(&self, id: TerritoryId) -> &TerritoryInfo {
        &self.territories[id.index()]
    }

    /// Full code of a territory.
    pub fn code(&self, id: TerritoryId) -> &str {
        &self.territories[id.index()].code
    }

    /// Parent of a subdivision.
    pub fn parent(&self, id: TerritoryId) -> Option<TerritoryId> {
        self.territories[id.index()].parent
    }

    /// The international territory (always the last entry).
    pub fn international(&self) -> TerritoryId {
        self.international
    }

    /// Whether any subdivision names `id` as its parent.
    pub fn has_subdivisions(&self, id: TerritoryId) -> bool {
        self.territories.iter().any(|t| t.parent == Some(id))
    }

    /// All territory ids in number order.
    pub fn ids(&self) -> impl Iterator<Item = TerritoryId> + '_ {
        (0..self.territories.len()).map(|i| TerritoryId(i as u16))
    }

    /// Resolve a territory name.
    ///
    /// Accepts full codes and aliases case-insensitively, with `_` or `-`
    /// as subdivision separator, and numeric territory numbers. A bare
    /// subdivision code (`CA`) is resolved under the parent of `context`
    /// (or `context` itself), and otherwise only when it is unambiguous.
    pub fn lookup(&self, name: &str, context: Option<TerritoryId>) -> Option<TerritoryId> {
        let key = normalize(name);
        if let Some(&id) = self.names.get(&key) {
            return Some(id);
        }
        if let Ok(n) = key.parse::<u16>() {
            return ((n as usize) < self.territories.len()).then_some(TerritoryId(n));
        }
        let candidates = self.short_names.get(&key)?;
        if let Some(ctx) = context {
            let parent = self.parent(ctx).unwrap_or(ctx);
            if let Some(&id) = candidates.iter().find(|&&c| self.parent(c) == Some(parent)) {
                return Some(id);
            }
        }
        (candidates.len() == 1).then(|| candidates[0])
    }
}

fn is_valid_code(code: &str) -> bool {
    let part_ok = |p: &str| (2..=3).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric());
    match code.split_once(['-', '_']) {
        Some((a, b)) => part_ok(a) && part_ok(b),
        None => part_ok(code),
    }
}
