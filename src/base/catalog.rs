//! Static question catalogues for each questionnaire variant.
//!
//! Every indicator is declared here together with the tier it belongs to.
//! The engine only ever looks at this declaration; it never inspects the
//! question text to decide anything.

use crate::base::types::{Locale, Organ, Tier, Variant};

/// A piece of user facing copy in every supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub id: &'static str,
}

impl Text {
    pub const fn new(en: &'static str, id: &'static str) -> Self {
        Self { en, id }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Id => self.id,
        }
    }
}

/// A single yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub tier: Tier,
    pub text: Text,
}

/// A titled group of questions, shown together on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: Text,
    pub note: Option<Text>,
    pub questions: &'static [Question],
}

/// The complete set of questions for one organ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Questionnaire {
    pub organ: Organ,
    pub title: Text,
    pub sections: &'static [Section],
}

impl Questionnaire {
    /// All questions in form order.
    pub fn questions(self) -> impl Iterator<Item = &'static Question> {
        self.sections.iter().flat_map(|s| s.questions.iter())
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&'static Question> {
        self.questions().find(|q| q.id == id)
    }

    /// Ids of the questions belonging to `tier`, in form order.
    pub fn ids_in(&self, tier: Tier) -> Vec<&'static str> {
        self.questions().filter(|q| q.tier == tier).map(|q| q.id).collect()
    }
}

/// The questionnaires making up a variant, in display order.
pub fn questionnaires(variant: Variant) -> &'static [Questionnaire] {
    match variant {
        Variant::Colonoscopy => &SINGLE,
        Variant::Dual => &DUAL,
    }
}

/// The per-organ questionnaire of the dual variant.
pub fn questionnaire_for(organ: Organ) -> &'static Questionnaire {
    match organ {
        Organ::Upper => &DUAL[0],
        Organ::Lower => &DUAL[1],
    }
}

// Colonoscopy (single organ).

const fn q(id: &'static str, tier: Tier, en: &'static str, idn: &'static str) -> Question {
    Question { id, tier, text: Text::new(en, idn) }
}

const COLONOSCOPY_WARNING: [Question; 7] = [
    q(
        "q1",
        Tier::Urgent,
        "Do you often pass fresh red blood with your stool (repeatedly in the last 3 months)?",
        "Apakah Anda sering buang air besar disertai darah merah segar (berulang dalam 3 bulan terakhir)?",
    ),
    q(
        "q2",
        Tier::Urgent,
        "Has your bowel habit changed (more or less frequent, or narrower stools) for more than 4 weeks?",
        "Apakah pola buang air besar Anda berubah (lebih sering/lebih jarang atau feses menjadi lebih kecil) dan berlangsung lebih dari 4 minggu?",
    ),
    q(
        "q3",
        Tier::Urgent,
        "Have you had diarrhoea for 4 weeks or longer without improvement?",
        "Apakah Anda mengalami diare selama 4 minggu atau lebih tanpa membaik?",
    ),
    q(
        "q4",
        Tier::Urgent,
        "Have you lost weight without a clear reason in the last 3 months?",
        "Apakah berat badan Anda turun tanpa sebab yang jelas dalam 3 bulan terakhir?",
    ),
    q(
        "q5",
        Tier::Urgent,
        "Do you often have abdominal pain or bloating, especially before a bowel movement?",
        "Apakah sering terasa nyeri atau kembung di perut, terutama sebelum buang air besar?",
    ),
    q(
        "q6",
        Tier::Urgent,
        "Has a doctor told you that you have iron deficiency anaemia?",
        "Apakah pernah diberitahu dokter bahwa Anda mengalami anemia defisiensi besi (darah rendah akibat kekurangan zat besi)?",
    ),
    q(
        "q7",
        Tier::Urgent,
        "Did a stool test show hidden blood (positive stool test)?",
        "Apakah hasil pemeriksaan tinja Anda menunjukkan adanya darah samar (tes feses positif)?",
    ),
];

const COLONOSCOPY_IMMEDIATE: [Question; 3] = [
    q(
        "q8",
        Tier::Emergent,
        "Do you have bloody stools together with abdominal pain and fever?",
        "Apakah Anda mengalami buang air besar berdarah disertai nyeri perut dan demam?",
    ),
    q(
        "q9",
        Tier::Emergent,
        "Do you pass large amounts of black, tarry stool, or feel very weak or faint?",
        "Apakah Anda buang air besar hitam pekat dalam jumlah banyak, atau merasa sangat lemas/pusing seperti mau pingsan?",
    ),
    q(
        "q10",
        Tier::Emergent,
        "Is a lot of blood coming from the anus (dripping or staining the toilet)?",
        "Apakah darah keluar banyak dari anus (menetes atau membasahi kloset)?",
    ),
];

const COLONOSCOPY_RISK: [Question; 5] = [
    q(
        "q11",
        Tier::Screening,
        "Are you aged 45 to 75 and have never had colorectal cancer screening?",
        "Apakah Anda berusia 45–75 tahun dan belum pernah menjalani skrining kanker usus besar sebelumnya?",
    ),
    q(
        "q12",
        Tier::Screening,
        "Has a close family member (parent, sibling or child) had colorectal cancer or colon polyps?",
        "Apakah ada anggota keluarga dekat (orang tua, saudara kandung, atau anak) yang pernah menderita kanker usus besar atau polip di usus?",
    ),
    q(
        "q13",
        Tier::Screening,
        "Were polyps found in your large bowel during an earlier examination?",
        "Apakah Anda pernah ditemukan memiliki polip (benjolan kecil) di usus besar pada pemeriksaan sebelumnya?",
    ),
    q(
        "q14",
        Tier::Screening,
        "Do you have a chronic inflammatory bowel disease such as ulcerative colitis or Crohn's disease?",
        "Apakah Anda memiliki penyakit radang usus kronis, seperti kolitis ulseratif atau penyakit Crohn?",
    ),
    q(
        "q15",
        Tier::Screening,
        "Did a stool test show hidden blood that has not yet been followed up with a colonoscopy?",
        "Apakah hasil tes tinja Anda menunjukkan darah samar dan belum pernah diperiksa lebih lanjut dengan kolonoskopi?",
    ),
];

const COLONOSCOPY_OTHER: [Question; 2] = [
    q(
        "q16",
        Tier::Soft,
        "Do you often feel your bowels have not emptied fully, or are your stools narrower than usual?",
        "Apakah Anda sering merasa buang air besar belum tuntas atau diameter feses menjadi lebih kecil dari biasanya?",
    ),
    q(
        "q17",
        Tier::Soft,
        "Has mucus been passing with your stool for some time?",
        "Apakah terdapat lendir yang keluar bersama feses selama beberapa waktu?",
    ),
];

const COLONOSCOPY_SECTIONS: [Section; 4] = [
    Section {
        title: Text::new("A. Symptoms to watch for", "A. Gejala yang Perlu Diperhatikan"),
        note: None,
        questions: &COLONOSCOPY_WARNING,
    },
    Section {
        title: Text::new("B. Complaints that need immediate care", "B. Keluhan yang Memerlukan Pemeriksaan Segera"),
        note: Some(Text::new(
            "If you answer 'yes' to any question above, go to the emergency department for further examination.",
            "Bila Anda menjawab 'Ya' pada pertanyaan di atas, sebaiknya segera ke unit gawat darurat untuk pemeriksaan lebih lanjut.",
        )),
        questions: &COLONOSCOPY_IMMEDIATE,
    },
    Section {
        title: Text::new("C. History and risk factors", "C. Riwayat dan Faktor Risiko"),
        note: None,
        questions: &COLONOSCOPY_RISK,
    },
    Section {
        title: Text::new("D. Other", "D. Lain-lain"),
        note: None,
        questions: &COLONOSCOPY_OTHER,
    },
];

pub const COLONOSCOPY: Questionnaire = Questionnaire {
    organ: Organ::Lower,
    title: Text::new("Colonoscopy self-screening", "Skrining Mandiri Kolonoskopi"),
    sections: &COLONOSCOPY_SECTIONS,
};

// EGD + colonoscopy (dual organ).

const UPPER_ALARM: [Question; 5] = [
    q(
        "u1",
        Tier::Urgent,
        "Do you have difficulty or pain when swallowing that keeps getting worse?",
        "Apakah Anda mengalami sulit atau nyeri saat menelan yang makin lama makin berat?",
    ),
    q(
        "u2",
        Tier::Urgent,
        "Have you vomited blood or material that looks like coffee grounds?",
        "Apakah Anda pernah muntah darah atau muntahan berwarna hitam seperti ampas kopi?",
    ),
    q(
        "u3",
        Tier::Urgent,
        "Have you passed black, tarry stools?",
        "Apakah Anda buang air besar berwarna hitam pekat seperti aspal?",
    ),
    q(
        "u4",
        Tier::Urgent,
        "Do you vomit repeatedly, or have you lost weight without a clear reason, together with upper abdominal complaints?",
        "Apakah Anda muntah berulang, atau berat badan turun tanpa sebab jelas, disertai keluhan perut bagian atas?",
    ),
    q(
        "u5",
        Tier::Urgent,
        "Has a doctor found iron deficiency anaemia together with heartburn or upper abdominal pain?",
        "Apakah dokter menemukan anemia defisiensi besi disertai keluhan ulu hati atau nyeri perut atas?",
    ),
];

const UPPER_RISK: [Question; 4] = [
    q(
        "u6",
        Tier::Screening,
        "Are you 60 or older and your upper abdominal complaints started recently?",
        "Apakah Anda berusia 60 tahun atau lebih dan keluhan perut bagian atas baru muncul?",
    ),
    q(
        "u7",
        Tier::Screening,
        "Has a close family member had stomach or oesophageal cancer?",
        "Apakah ada keluarga dekat yang pernah menderita kanker lambung atau kerongkongan?",
    ),
    q(
        "u8",
        Tier::Screening,
        "Have you had heartburn or acid reflux for more than 5 years, or been told you have Barrett's oesophagus?",
        "Apakah Anda mengalami nyeri ulu hati/refluks asam lebih dari 5 tahun, atau pernah didiagnosis esofagus Barrett?",
    ),
    q(
        "u9",
        Tier::Screening,
        "Have you had a Helicobacter pylori infection or a stomach ulcer that was never checked again?",
        "Apakah Anda pernah terinfeksi Helicobacter pylori atau tukak lambung yang belum pernah diperiksa ulang?",
    ),
];

const UPPER_OTHER: [Question; 2] = [
    q(
        "u10",
        Tier::Soft,
        "Do you often have heartburn, bloating or early fullness after eating?",
        "Apakah Anda sering merasa nyeri ulu hati, kembung, atau cepat kenyang setelah makan?",
    ),
    q(
        "u11",
        Tier::Soft,
        "Do you often have nausea or a sour taste in your mouth?",
        "Apakah Anda sering mual atau merasa asam di mulut?",
    ),
];

const LOWER_ALARM: [Question; 5] = [
    q(
        "l1",
        Tier::Urgent,
        "Do you pass fresh red blood with your stool repeatedly, or a large amount at once?",
        "Apakah Anda buang air besar disertai darah merah segar berulang atau dalam jumlah banyak?",
    ),
    q(
        "l2",
        Tier::Urgent,
        "Has your bowel habit changed, or have you had diarrhoea, for more than 4 weeks?",
        "Apakah pola buang air besar Anda berubah atau diare lebih dari 4 minggu?",
    ),
    q(
        "l3",
        Tier::Urgent,
        "Have you lost weight without a clear reason in the last 3 months?",
        "Apakah berat badan Anda turun tanpa sebab yang jelas dalam 3 bulan terakhir?",
    ),
    q(
        "l4",
        Tier::Urgent,
        "Has a doctor told you that you have iron deficiency anaemia?",
        "Apakah pernah diberitahu dokter bahwa Anda mengalami anemia defisiensi besi?",
    ),
    q(
        "l5",
        Tier::Urgent,
        "Did a stool test show hidden blood (positive stool test)?",
        "Apakah hasil pemeriksaan tinja Anda menunjukkan adanya darah samar?",
    ),
];

const LOWER_RISK: [Question; 4] = [
    q(
        "l6",
        Tier::Screening,
        "Are you aged 45 to 75 and have never had colorectal cancer screening?",
        "Apakah Anda berusia 45–75 tahun dan belum pernah menjalani skrining kanker usus besar?",
    ),
    q(
        "l7",
        Tier::Screening,
        "Has a close family member had colorectal cancer or colon polyps?",
        "Apakah ada keluarga dekat yang pernah menderita kanker usus besar atau polip usus?",
    ),
    q(
        "l8",
        Tier::Screening,
        "Were polyps found in your large bowel during an earlier examination?",
        "Apakah Anda pernah ditemukan memiliki polip di usus besar pada pemeriksaan sebelumnya?",
    ),
    q(
        "l9",
        Tier::Screening,
        "Do you have ulcerative colitis or Crohn's disease?",
        "Apakah Anda memiliki kolitis ulseratif atau penyakit Crohn?",
    ),
];

const LOWER_OTHER: [Question; 2] = [
    q(
        "l10",
        Tier::Soft,
        "Do you often feel your bowels have not emptied fully?",
        "Apakah Anda sering merasa buang air besar belum tuntas?",
    ),
    q(
        "l11",
        Tier::Soft,
        "Has mucus been passing with your stool for some time?",
        "Apakah terdapat lendir yang keluar bersama feses selama beberapa waktu?",
    ),
];

const UPPER_SECTIONS: [Section; 3] = [
    Section {
        title: Text::new("Upper tract: alarm signs", "Saluran cerna atas: tanda bahaya"),
        note: None,
        questions: &UPPER_ALARM,
    },
    Section {
        title: Text::new("Upper tract: risk factors", "Saluran cerna atas: faktor risiko"),
        note: None,
        questions: &UPPER_RISK,
    },
    Section {
        title: Text::new("Upper tract: other complaints", "Saluran cerna atas: keluhan lain"),
        note: None,
        questions: &UPPER_OTHER,
    },
];

const LOWER_SECTIONS: [Section; 3] = [
    Section {
        title: Text::new("Lower tract: alarm signs", "Saluran cerna bawah: tanda bahaya"),
        note: None,
        questions: &LOWER_ALARM,
    },
    Section {
        title: Text::new("Lower tract: risk factors", "Saluran cerna bawah: faktor risiko"),
        note: None,
        questions: &LOWER_RISK,
    },
    Section {
        title: Text::new("Lower tract: other complaints", "Saluran cerna bawah: keluhan lain"),
        note: None,
        questions: &LOWER_OTHER,
    },
];

pub const UPPER: Questionnaire = Questionnaire {
    organ: Organ::Upper,
    title: Text::new("Upper endoscopy (EGD)", "Endoskopi saluran cerna atas (EGD)"),
    sections: &UPPER_SECTIONS,
};

pub const LOWER: Questionnaire = Questionnaire {
    organ: Organ::Lower,
    title: Text::new("Colonoscopy", "Kolonoskopi"),
    sections: &LOWER_SECTIONS,
};

static SINGLE: [Questionnaire; 1] = [COLONOSCOPY];
static DUAL: [Questionnaire; 2] = [UPPER, LOWER];
