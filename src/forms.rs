//! Produk input form.
//!
//! `PRODUK_FIELDS` declares how each editable field is labelled, parsed and rendered.
//! The value constraints are the `validator` attributes on `ProdukDraft`; `ProdukForm::clean`
//! turns their errors into per-field messages.

use std::collections::{BTreeMap, HashMap};

use validator::{Validate, ValidationError};

use crate::db::{DbProduk, ProdukDraft};

pub const MSG_REQUIRED: &str = "Bidang ini wajib diisi.";
pub const MSG_INVALID_INTEGER: &str = "Masukkan bilangan bulat.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    TextInput,
    NumberInput,
    Textarea { rows: u8, cols: u8 },
}

/// Parse type plus the HTML hints (`maxlength`, `min`) rendered with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text { max_length: Option<usize> },
    Integer { min: Option<i64> },
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    pub widget: Widget,
}

pub static PRODUK_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "nama",
        label: "Nama",
        required: true,
        kind: FieldKind::Text {
            max_length: Some(100),
        },
        widget: Widget::TextInput,
    },
    FieldSpec {
        name: "harga",
        label: "Harga",
        required: true,
        kind: FieldKind::Integer { min: Some(0) },
        widget: Widget::NumberInput,
    },
    FieldSpec {
        name: "stok",
        label: "Stok",
        required: true,
        kind: FieldKind::Integer { min: Some(0) },
        widget: Widget::NumberInput,
    },
    FieldSpec {
        name: "deskripsi",
        label: "Deskripsi",
        required: false,
        kind: FieldKind::Text { max_length: None },
        widget: Widget::Textarea { rows: 3, cols: 40 },
    },
];

impl FieldSpec {
    fn find(name: &str) -> Option<&'static FieldSpec> {
        PRODUK_FIELDS.iter().find(|spec| spec.name == name)
    }
}

/// Indonesian message for a constraint reported by `ProdukDraft::validate`.
fn describe(err: &ValidationError, value: &str) -> String {
    match &*err.code {
        "length" => {
            let len = value.chars().count();
            if len == 0 {
                return MSG_REQUIRED.to_string();
            }
            let max = err
                .params
                .get("max")
                .and_then(|v| v.as_u64())
                .unwrap_or_default();
            format!("Pastikan isian ini tidak lebih dari {max} karakter (sekarang {len}).")
        }
        "range" => {
            let min = err
                .params
                .get("min")
                .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
                .unwrap_or_default();
            format!("Pastikan nilai ini lebih besar dari atau sama dengan {min}.")
        }
        _ => err
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| err.code.to_string()),
    }
}

/// One field ready for rendering: its declaration, current value and errors.
#[derive(Debug, Clone)]
pub struct BoundField {
    pub spec: FieldSpec,
    pub value: String,
    pub errors: Vec<String>,
}

impl BoundField {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    pub fn required(&self) -> bool {
        self.spec.required
    }

    pub fn is_textarea(&self) -> bool {
        matches!(self.spec.widget, Widget::Textarea { .. })
    }

    pub fn input_type(&self) -> &'static str {
        match self.spec.widget {
            Widget::NumberInput => "number",
            _ => "text",
        }
    }

    pub fn rows(&self) -> u8 {
        match self.spec.widget {
            Widget::Textarea { rows, .. } => rows,
            _ => 0,
        }
    }

    pub fn cols(&self) -> u8 {
        match self.spec.widget {
            Widget::Textarea { cols, .. } => cols,
            _ => 0,
        }
    }

    pub fn max_length(&self) -> Option<usize> {
        match self.spec.kind {
            FieldKind::Text { max_length } => max_length,
            FieldKind::Integer { .. } => None,
        }
    }

    pub fn min(&self) -> Option<i64> {
        match self.spec.kind {
            FieldKind::Integer { min } => min,
            FieldKind::Text { .. } => None,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProdukForm {
    data: HashMap<String, String>,
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl ProdukForm {
    /// Empty form for creating a record.
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Form pre-populated from an existing record.
    pub fn from_produk(produk: &DbProduk) -> Self {
        let data = HashMap::from([
            ("nama".to_string(), produk.nama.clone()),
            ("harga".to_string(), produk.harga.to_string()),
            ("stok".to_string(), produk.stok.to_string()),
            ("deskripsi".to_string(), produk.deskripsi.clone()),
        ]);
        Self {
            data,
            errors: BTreeMap::new(),
        }
    }

    /// Form wrapping submitted `application/x-www-form-urlencoded` data.
    pub fn bind(data: HashMap<String, String>) -> Self {
        Self {
            data,
            errors: BTreeMap::new(),
        }
    }

    pub fn errors(&self) -> &BTreeMap<&'static str, Vec<String>> {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn raw(&self, name: &str) -> &str {
        self.data.get(name).map(|v| v.trim()).unwrap_or("")
    }

    /// Parse an integer field; parse failures are recorded here, before `validate` runs.
    fn integer(&mut self, name: &'static str) -> i64 {
        let raw = self.raw(name);
        if raw.is_empty() {
            let required = FieldSpec::find(name).is_some_and(|spec| spec.required);
            if required {
                self.errors.entry(name).or_default().push(MSG_REQUIRED.to_string());
            }
            return 0;
        }
        match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                self.errors
                    .entry(name)
                    .or_default()
                    .push(MSG_INVALID_INTEGER.to_string());
                0
            }
        }
    }

    /// Trim and parse the submission, then check `ProdukDraft`'s constraints.
    /// Unknown keys in the submission are ignored.
    pub fn clean(mut self) -> Result<ProdukDraft, ProdukForm> {
        self.errors.clear();
        let draft = ProdukDraft {
            nama: self.raw("nama").to_string(),
            harga: self.integer("harga"),
            stok: self.integer("stok"),
            deskripsi: self.raw("deskripsi").to_string(),
        };

        if let Err(errors) = draft.validate() {
            for (field, field_errors) in errors.field_errors() {
                let Some(spec) = FieldSpec::find(&field) else {
                    continue;
                };
                // A parse error already explains the field.
                if self.errors.contains_key(spec.name) {
                    continue;
                }
                let value = self.raw(spec.name).to_string();
                let messages: Vec<String> =
                    field_errors.iter().map(|err| describe(err, &value)).collect();
                self.errors.entry(spec.name).or_default().extend(messages);
            }
        }

        if self.errors.is_empty() {
            Ok(draft)
        } else {
            Err(self)
        }
    }

    pub fn fields(&self) -> Vec<BoundField> {
        PRODUK_FIELDS
            .iter()
            .map(|spec| BoundField {
                spec: *spec,
                value: self.data.get(spec.name).cloned().unwrap_or_default(),
                errors: self.errors.get(spec.name).cloned().unwrap_or_default(),
            })
            .collect()
    }
}
