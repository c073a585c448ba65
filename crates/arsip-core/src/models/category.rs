use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::ArchiveError;

/// Archive category of a document
///
/// Serialized with the archive's Indonesian labels. The English names are
/// accepted as aliases on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileCategory {
    #[serde(rename = "Administrasi", alias = "Administration")]
    Administration,
    #[serde(rename = "Laporan", alias = "Report")]
    Report,
    #[serde(rename = "Keuangan", alias = "Finance")]
    Finance,
    #[serde(rename = "Produk Hukum", alias = "Legal")]
    Legal,
    #[serde(rename = "Dokumentasi Foto", alias = "Photo-Documentation")]
    PhotoDocumentation,
    #[serde(rename = "Lainnya", alias = "Other")]
    Other,
}

impl FileCategory {
    /// All categories in display order
    pub const ALL: [FileCategory; 6] = [
        FileCategory::Administration,
        FileCategory::Report,
        FileCategory::Finance,
        FileCategory::Legal,
        FileCategory::PhotoDocumentation,
        FileCategory::Other,
    ];

    /// Archive label, as stored and as offered to the classifier
    pub fn label(&self) -> &'static str {
        match self {
            FileCategory::Administration => "Administrasi",
            FileCategory::Report => "Laporan",
            FileCategory::Finance => "Keuangan",
            FileCategory::Legal => "Produk Hukum",
            FileCategory::PhotoDocumentation => "Dokumentasi Foto",
            FileCategory::Other => "Lainnya",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            FileCategory::Administration => "Administration",
            FileCategory::Report => "Report",
            FileCategory::Finance => "Finance",
            FileCategory::Legal => "Legal",
            FileCategory::PhotoDocumentation => "Photo-Documentation",
            FileCategory::Other => "Other",
        }
    }

    /// Typical documents of the category, used as classifier guidance
    pub fn description(&self) -> &'static str {
        match self {
            FileCategory::Administration => {
                "Surat keputusan, surat masuk/keluar, undangan"
            }
            FileCategory::Report => "Laporan kegiatan, laporan bulanan, evaluasi",
            FileCategory::Finance => "Laporan anggaran, kwitansi, bukti bayar",
            FileCategory::Legal => "Peraturan daerah, undang-undang, SK Bupati/Gubernur",
            FileCategory::PhotoDocumentation => "Foto kegiatan, spanduk, visual",
            FileCategory::Other => "Dokumen yang tidak cocok dengan kategori lain",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }
}

impl Display for FileCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

impl FromStr for FileCategory {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.label().eq_ignore_ascii_case(wanted)
                    || c.english_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ArchiveError::InvalidInput(format!("Unknown category: {}", s)))
    }
}
