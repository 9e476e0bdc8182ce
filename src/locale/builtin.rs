//! Built-in locale data.

use super::{Locale, Masks};

const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

const ARABIC_ORDINALS: [&str; 11] = [
    "الأول",
    "الثاني",
    "الثالث",
    "الرابع",
    "الخامس",
    "السادس",
    "السابع",
    "الثامن",
    "التاسع",
    "العاشر",
    "الحادي عشر",
];

/// English suffixes: 1st, 2nd, 3rd, 4th, 11th-13th, 21st.
fn english_ordinal(day: u32) -> String {
    let last = day % 10;
    let suffix = if last > 3 || day % 100 - last == 10 {
        "th"
    } else {
        ["th", "st", "nd", "rd"][last as usize]
    };
    suffix.to_string()
}

/// Arabic ordinal phrases ("the first of", "the twenty-first of", ...).
fn arabic_ordinal(day: u32) -> String {
    let unit = |d: u32| ARABIC_ORDINALS[((d + 9) % 10) as usize];
    let phrase = match day {
        0 => String::new(),
        1..=11 => ARABIC_ORDINALS[(day - 1) as usize].to_string(),
        12..=19 => format!("{} عشر", unit(day)),
        20 => "العشرون".to_string(),
        21..=29 => format!("{} والعشرون", unit(day)),
        30 => "الثلاثون".to_string(),
        _ => return day.to_string(),
    };
    format!("{phrase} من")
}

impl Locale {
    /// English with Latin transliterated month names.
    pub fn en() -> Self {
        Locale {
            name: "en",
            rtl: false,
            day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            day_names: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
            month_names_short: [
                "Muh", "Ṣaf", "Rab-I", "Rab-II", "Jum-I", "Jum-II", "Raj", "Sha", "Ram", "Shw",
                "Dhū-Q", "Dhū-Ḥ",
            ],
            month_names: [
                "Muharram",
                "Ṣafar",
                "Rabīʿ al-Awwal",
                "Rabīʿ ath-Thānī",
                "Jumādá al-Ūlá",
                "Jumādá al-Ākhirah",
                "Rajab",
                "Sha‘bān",
                "Ramaḍān",
                "Shawwāl",
                "Dhū al-Qa‘dah",
                "Dhū al-Ḥijjah",
            ],
            time_names: ["a", "p", "am", "pm", "A", "P", "AM", "PM"],
            masks: Masks {
                default: "ddd MMM dd yyyy HH:mm:ss",
                short_date: "M/d/yy",
                medium_date: "MMM d, yyyy",
                long_date: "MMMM d, yyyy",
                full_date: "dddd, MMMM d, yyyy",
                short_time: "h:mm TT",
                medium_time: "h:mm:ss TT",
                long_time: "h:mm:ss.l TT",
            },
            digits: None,
            comma: ',',
            day_ordinal: english_ordinal,
        }
    }

    /// Arabic with Arabic-Indic numerals.
    pub fn ar() -> Self {
        Locale {
            name: "ar",
            rtl: true,
            day_names_short: ["ح", "ن", "ث", "ر", "خ", "ج", "س"],
            day_names: [
                "الأحد",
                "الإثنين",
                "الثلاثاء",
                "الأربعاء",
                "الخميس",
                "الجمعة",
                "السبت",
            ],
            month_names_short: [
                "محرم",
                "صفر",
                "ربيع ١",
                "ربيع ٢",
                "جمادى ١",
                "جمادى ٢",
                "رجب",
                "شعبان",
                "رمضان",
                "شوال",
                "ذو القعدة",
                "ذو الحجة",
            ],
            month_names: [
                "محرم",
                "صفر",
                "ربيع الأول",
                "ربيع الثاني",
                "جمادى الأولى",
                "جمادى الآخرة",
                "رجب",
                "شعبان",
                "رمضان",
                "شوال",
                "ذو القعدة",
                "ذو الحجة",
            ],
            time_names: ["ص", "م", "ص", "م", "ص", "م", "ص", "م"],
            masks: Masks {
                default: "ddd dd MMM yyyy HH:mm:ss",
                short_date: "yy/M/d",
                medium_date: "d MMM, yyyy",
                long_date: "d MMMM, yyyy",
                full_date: "dddd, d MMMM, yyyy",
                short_time: "h:mm TT",
                medium_time: "h:mm:ss TT",
                long_time: "h:mm:ss.l TT",
            },
            digits: Some(ARABIC_DIGITS),
            comma: '،',
            day_ordinal: arabic_ordinal,
        }
    }
}
