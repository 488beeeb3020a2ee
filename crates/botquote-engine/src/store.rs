//! Selection persistence facade
//!
//! The calling UI layer owns the visitor's last-used selection and
//! persists it as a single flat record, overwritten wholesale on every
//! change. The engine never reads or writes this store; it exists so the
//! caller has a narrow load/save seam with defensive defaulting for
//! missing or old-shaped records. There is no schema versioning and no
//! migration path.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

use botquote_core::models::{BillingCycle, Currency, PricingRequest, ProductLine};
use botquote_core::AppResult;

/// Persisted selection record
///
/// Every field carries a default so a record written by an older shape
/// of the caller loads as defaults instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredSelection {
    /// Selected product line tab
    pub product_line: ProductLine,

    /// Selected billing cycle
    pub billing_cycle: BillingCycle,

    /// Selected display currency
    pub currency: Currency,

    /// Chat slider position
    pub chat_sessions: i64,

    /// WhatsApp channel toggle
    pub whatsapp_enabled: bool,

    /// Voice slider position
    pub voice_minutes: i64,

    /// Selected voice provider id
    pub voice_provider: Option<String>,

    /// Selected add-on ids
    pub selected_add_ons: Vec<String>,

    /// When the record was written
    pub saved_at: DateTime<Utc>,
}

impl Default for StoredSelection {
    fn default() -> Self {
        Self {
            product_line: ProductLine::Chat,
            billing_cycle: BillingCycle::Monthly,
            currency: Currency::Inr,
            chat_sessions: 60,
            whatsapp_enabled: false,
            voice_minutes: 1500,
            voice_provider: Some("plivo".to_string()),
            selected_add_ons: Vec::new(),
            saved_at: Utc::now(),
        }
    }
}

impl StoredSelection {
    /// Build the engine request this selection currently describes
    pub fn to_request(&self) -> PricingRequest {
        let (usage, add_ons, provider) = match self.product_line {
            ProductLine::Chat => {
                let add_ons = if self.whatsapp_enabled {
                    vec!["whatsapp".to_string()]
                } else {
                    Vec::new()
                };
                (self.chat_sessions, add_ons, None)
            }
            ProductLine::Voice => (
                self.voice_minutes,
                self.selected_add_ons.clone(),
                self.voice_provider.clone(),
            ),
        };

        PricingRequest {
            product_line: self.product_line,
            usage_amount: usage,
            billing_cycle: self.billing_cycle,
            currency: self.currency,
            selected_add_ons: add_ons,
            provider,
        }
    }
}

/// Narrow load/save interface over the persisted selection
pub trait SelectionStore: Send + Sync {
    /// Load the last-saved selection, if any
    fn load(&self) -> AppResult<Option<StoredSelection>>;

    /// Overwrite the persisted selection wholesale
    fn save(&self, selection: &StoredSelection) -> AppResult<()>;
}

/// Single-file JSON store
///
/// A missing file is an empty store. A corrupt file loads as empty with
/// a warning; the next save overwrites it.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SelectionStore for JsonFileStore {
    fn load(&self) -> AppResult<Option<StoredSelection>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(selection) => Ok(Some(selection)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt selection record, ignoring");
                Ok(None)
            }
        }
    }

    fn save(&self, selection: &StoredSelection) -> AppResult<()> {
        let json = serde_json::to_string_pretty(selection)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral callers
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Option<StoredSelection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemoryStore {
    fn load(&self) -> AppResult<Option<StoredSelection>> {
        Ok(self.inner.read().clone())
    }

    fn save(&self, selection: &StoredSelection) -> AppResult<()> {
        *self.inner.write() = Some(selection.clone());
        Ok(())
    }
}
