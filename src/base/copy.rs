//! Fixed patient facing copy: verdict labels, advice, reasons and letter text.

use crate::base::{
    catalog::Text,
    types::{Locale, Organ, Tier, Verdict},
};

/// Educational disclaimer shown under every result and at the foot of the letter.
pub const DISCLAIMER: Text = Text::new(
    "This result is educational. The final decision about an endoscopic examination is made by a doctor.",
    "Catatan: hasil ini bersifat edukatif. Keputusan akhir mengenai pemeriksaan endoskopi ditentukan oleh dokter.",
);

pub const INTRO: Text = Text::new(
    "A simple guide to help you recognise whether you should have an endoscopic examination. This form is educational and does not replace a consultation with a doctor.",
    "Panduan sederhana untuk membantu mengenali apakah Anda sebaiknya menjalani pemeriksaan endoskopi. Form ini bersifat edukatif dan tidak menggantikan konsultasi medis dengan dokter.",
);

pub const RESULT_HEADING: Text = Text::new("Screening result", "Hasil Skrining");
pub const ADVICE_HEADING: Text = Text::new("Recommendation", "Rekomendasi");
pub const REASONS_HEADING: Text = Text::new("Short explanation", "Penjelasan Singkat");

pub const LETTER_TITLE: Text = Text::new("Endoscopy Self-Screening Result", "Hasil Skrining Mandiri Endoskopi");
pub const LETTER_NAME: Text = Text::new("Name", "Nama");
pub const LETTER_AGE: Text = Text::new("Age", "Usia");
pub const LETTER_SEX: Text = Text::new("Sex", "Jenis kelamin");
pub const LETTER_DATE: Text = Text::new("Date", "Tanggal");
pub const NOT_FILLED: Text = Text::new("Not filled in", "Tidak diisi");
pub const YEARS: Text = Text::new("years", "tahun");
pub const LETTER_SAVED: Text = Text::new("Letter saved to", "Surat disimpan di");

// Interactive prompt.

pub const YES_NO_HINT: Text = Text::new("[y/N]", "[ya/tidak]");
pub const ANSWER_YES_NO: Text = Text::new("Please answer y or n.", "Mohon jawab ya atau tidak.");
pub const BLANK: Text = Text::new("blank", "kosong");
pub const ANSWER_SEX: Text = Text::new("Please enter 1, 2 or leave blank.", "Mohon isi 1, 2 atau kosongkan.");

pub fn answer_age(max: u8, locale: Locale) -> String {
    match locale {
        Locale::En => format!("Please enter a whole number between 0 and {max}."),
        Locale::Id => format!("Mohon isi bilangan bulat antara 0 dan {max}."),
    }
}

/// Localized label of a verdict.
pub fn verdict_label(verdict: Verdict, locale: Locale) -> &'static str {
    let text = match verdict {
        Verdict::Emergency => Text::new("EMERGENCY", "EMERGENSI"),
        Verdict::UrgentReferral => Text::new("SEE A DOCTOR SOON", "PERLU KONSULTASI SEGERA"),
        Verdict::ScreeningEligible => Text::new("ELIGIBLE FOR SCREENING", "LAYAK UNTUK SKRINING"),
        Verdict::RoutineFollowup => Text::new("ROUTINE FOLLOW-UP", "TINDAK LANJUT BIASA"),
        Verdict::CurrentlySafe => Text::new("CURRENTLY SAFE", "AMAN SAAT INI"),
        Verdict::NoUrgentNeed => Text::new("NO URGENT NEED", "TIDAK ADA KEBUTUHAN MENDESAK"),
    };

    text.get(locale)
}

/// Localized advice bound to a verdict for one organ.
///
/// `threshold` is the screening age threshold, used by the "currently safe"
/// reminder.
pub fn advice(organ: Organ, verdict: Verdict, threshold: u8, locale: Locale) -> String {
    let text = match (organ, verdict) {
        (_, Verdict::Emergency) => Text::new(
            "Go to the emergency department or the nearest health facility immediately.",
            "Segera periksa ke unit gawat darurat atau fasilitas kesehatan terdekat.",
        ),
        (Organ::Lower, Verdict::UrgentReferral) => Text::new(
            "Consult an internal medicine or gastroenterology specialist within 1–2 weeks to consider a colonoscopy.",
            "Disarankan berkonsultasi ke dokter penyakit dalam atau gastroenterologi dalam 1–2 minggu untuk pertimbangan kolonoskopi.",
        ),
        (Organ::Upper, Verdict::UrgentReferral) => Text::new(
            "Consult an internal medicine or gastroenterology specialist within 1–2 weeks to consider an upper endoscopy (EGD).",
            "Disarankan berkonsultasi ke dokter penyakit dalam atau gastroenterologi dalam 1–2 minggu untuk pertimbangan endoskopi saluran cerna atas (EGD).",
        ),
        (Organ::Lower, Verdict::ScreeningEligible) => Text::new(
            "You should have colorectal cancer screening. Colonoscopy is the preferred option.",
            "Sebaiknya melakukan pemeriksaan skrining kanker usus besar. Kolonoskopi adalah pilihan utama.",
        ),
        (Organ::Upper, Verdict::ScreeningEligible) => Text::new(
            "Discuss a planned upper endoscopy with your doctor.",
            "Diskusikan pemeriksaan endoskopi saluran cerna atas terencana dengan dokter Anda.",
        ),
        (Organ::Lower, Verdict::RoutineFollowup) => Text::new(
            "Monitor your symptoms and get examined if complaints persist or worsen.",
            "Pantau gejala dan lakukan pemeriksaan bila keluhan menetap atau bertambah berat.",
        ),
        (Organ::Upper, Verdict::RoutineFollowup) => Text::new(
            "Adjust your eating habits and see a doctor if complaints persist or worsen.",
            "Perbaiki pola makan dan periksakan diri bila keluhan menetap atau bertambah berat.",
        ),
        (_, Verdict::CurrentlySafe) => {
            return match locale {
                Locale::En => format!("Keep monitoring your digestive health and get screened from age {threshold}."),
                Locale::Id => format!("Terus pantau kesehatan pencernaan Anda dan lakukan skrining saat usia ≥{threshold} tahun."),
            };
        }
        (Organ::Lower, Verdict::NoUrgentNeed) => Text::new(
            "There is no urgent need for a colonoscopy at this time.",
            "Saat ini tidak ada kebutuhan mendesak untuk kolonoskopi.",
        ),
        (Organ::Upper, Verdict::NoUrgentNeed) => Text::new(
            "There is no urgent need for an upper endoscopy at this time.",
            "Saat ini tidak ada kebutuhan mendesak untuk endoskopi saluran cerna atas.",
        ),
    };

    text.get(locale).to_string()
}

/// Localized summary of why a tier fired.
pub fn tier_reason(organ: Organ, tier: Tier, locale: Locale) -> &'static str {
    let text = match (organ, tier) {
        (_, Tier::Emergent) => Text::new(
            "Acute danger signs such as heavy bleeding or symptoms of severe colitis.",
            "Terdapat tanda bahaya akut seperti perdarahan banyak atau gejala kolitis berat.",
        ),
        (Organ::Lower, Tier::Urgent) => Text::new(
            "Warning symptoms that need a doctor's evaluation soon.",
            "Ada gejala peringatan yang perlu evaluasi dokter dalam waktu dekat.",
        ),
        (Organ::Upper, Tier::Urgent) => Text::new(
            "Upper tract alarm signs such as bleeding, difficulty swallowing or unexplained weight loss.",
            "Tanda bahaya saluran cerna atas seperti perdarahan, sulit menelan, atau penurunan berat badan tanpa sebab.",
        ),
        (Organ::Lower, Tier::Screening) => Text::new(
            "Risk factors or an age that meets the screening criteria.",
            "Terdapat faktor risiko atau usia yang sudah memenuhi kriteria skrining.",
        ),
        (Organ::Upper, Tier::Screening) => Text::new(
            "Risk factors for upper tract disease.",
            "Terdapat faktor risiko penyakit saluran cerna atas.",
        ),
        (Organ::Lower, Tier::Soft) => Text::new(
            "Mild complaints without danger signs.",
            "Keluhan ringan tanpa tanda bahaya.",
        ),
        (Organ::Upper, Tier::Soft) => Text::new(
            "Non-specific upper abdominal complaints without alarm signs.",
            "Keluhan perut atas non-spesifik tanpa tanda bahaya.",
        ),
    };

    text.get(locale)
}

pub fn below_threshold_reason(threshold: u8, locale: Locale) -> String {
    match locale {
        Locale::En => format!("Age is still below the routine screening threshold of {threshold} years."),
        Locale::Id => format!("Usia masih di bawah batas skrining rutin ({threshold} tahun)."),
    }
}

pub const UNKNOWN_AGE_BELOW: Text = Text::new(
    "Age was not provided; it is assumed to be below the routine screening threshold.",
    "Usia tidak diisi; dianggap masih di bawah batas skrining rutin.",
);

pub const UNKNOWN_AGE_AT: Text = Text::new(
    "Age was not provided; it is assumed to be at the routine screening threshold.",
    "Usia tidak diisi; dianggap sudah mencapai batas skrining rutin.",
);

pub const NOTHING_TRIGGERED: Text = Text::new(
    "No complaints or risk factors that need specific action right now.",
    "Tidak ada keluhan atau faktor risiko yang memerlukan tindakan khusus saat ini.",
);

pub const NO_INDICATION: Text = Text::new(
    "No answers point to an examination at this time.",
    "Tidak ada jawaban yang memicu indikasi pemeriksaan saat ini.",
);
