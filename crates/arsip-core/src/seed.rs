//! Demo roster and seed archive collection

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{ArchiveRecord, FileCategory, RecordId, Role, User};

fn avatar(name: &str, background: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background={}&color=fff",
        name.replace(' ', "+"),
        background
    )
}

/// The fixed set of users that can log in
pub fn roster() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            name: "Admin Arsip".to_string(),
            role: Role::Admin,
            avatar: avatar("Admin Arsip", "0D8ABC"),
        },
        User {
            id: "u2".to_string(),
            name: "Staf Administrasi".to_string(),
            role: Role::Staff,
            avatar: avatar("Staf Admin", "22c55e"),
        },
        User {
            id: "u3".to_string(),
            name: "Masyarakat Umum".to_string(),
            role: Role::Public,
            avatar: avatar("Public User", "64748b"),
        },
    ]
}

// Constant calendar dates; `earliest` only returns None for invalid input.
fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .earliest()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    file_name: &str,
    file_type: &str,
    size: u64,
    upload_date: DateTime<Utc>,
    category: FileCategory,
    tags: &[&str],
    uploaded_by: &str,
    description: &str,
) -> ArchiveRecord {
    ArchiveRecord {
        id: RecordId::new(id),
        file_name: file_name.to_string(),
        file_type: file_type.to_string(),
        size,
        upload_date,
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        uploaded_by: uploaded_by.to_string(),
        description: Some(description.to_string()),
    }
}

/// Initial archive contents used when no persisted collection is usable
pub fn seed_records() -> Vec<ArchiveRecord> {
    vec![
        record(
            "f1",
            "Laporan_Keuangan_Q1_2024.xlsx",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            2_500_000,
            at(2024, 3, 15, 10, 0),
            FileCategory::Finance,
            &["keuangan", "2024", "kuartal 1"],
            "u2",
            "Laporan realisasi anggaran kuartal pertama tahun 2024.",
        ),
        record(
            "f2",
            "SK_Pengangkatan_Pegawai_2024.pdf",
            "application/pdf",
            1_200_000,
            at(2024, 1, 10, 9, 30),
            FileCategory::Administration,
            &["SK", "kepegawaian", "2024"],
            "u1",
            "Surat Keputusan pengangkatan pegawai honorer.",
        ),
        record(
            "f3",
            "Dokumentasi_Rapat_Koordinasi.jpg",
            "image/jpeg",
            4_500_000,
            at(2024, 4, 2, 14, 15),
            FileCategory::PhotoDocumentation,
            &["rapat", "koordinasi", "foto"],
            "u2",
            "Foto kegiatan rapat koordinasi bulanan.",
        ),
        record(
            "f4",
            "Perda_No_5_Tahun_2023_Tata_Ruang.pdf",
            "application/pdf",
            5_600_000,
            at(2023, 12, 20, 11, 0),
            FileCategory::Legal,
            &["perda", "tata ruang", "hukum"],
            "u1",
            "Peraturan Daerah tentang Rencana Tata Ruang Wilayah.",
        ),
        record(
            "f5",
            "Evaluasi_Kinerja_Semester_1.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            850_000,
            at(2024, 7, 1, 8, 45),
            FileCategory::Report,
            &["evaluasi", "kinerja", "semester 1"],
            "u2",
            "Dokumen evaluasi kinerja pegawai semester 1.",
        ),
    ]
}
