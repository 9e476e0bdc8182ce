//! Hijri date and time formatting

use chrono::{NaiveDateTime, Timelike};

use crate::ast::{Mask, MaskPart, NameStyle, NumericField, Padding};
use crate::gregorian::millisecond;
use crate::hijri::HijriDate;
use crate::locale::Locale;

/// The calendar fields a mask can print besides the instant's time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HijriFields {
    pub date: HijriDate,
    /// Week of the Hijri year, 1-based.
    pub week_of_year: u32,
    /// 0 = Sunday through 6 = Saturday.
    pub day_of_week: u32,
}

/// Format an instant with a parsed mask.
///
/// The time of day comes from `instant`; every date field comes from
/// `fields`. Numbers use the locale's digits and literal commas the locale's
/// comma.
pub fn format_mask(
    instant: NaiveDateTime,
    mask: &Mask,
    locale: &Locale,
    fields: &HijriFields,
) -> String {
    let time = instant.time();
    let hour = time.hour();
    let mut result = String::new();

    for part in mask.parts() {
        match part {
            MaskPart::Literal(text) => {
                result.push_str(&locale.localize_commas(text));
            }
            MaskPart::Numeric(field, padding) => {
                let value = match field {
                    NumericField::Day => fields.date.day,
                    NumericField::Month => fields.date.month,
                    NumericField::Hour12 => match hour % 12 {
                        0 => 12,
                        h => h,
                    },
                    NumericField::Hour => hour,
                    NumericField::Minute => time.minute(),
                    NumericField::Second => time.second(),
                };
                let digits = match padding {
                    Padding::None => value.to_string(),
                    Padding::Two => format!("{value:02}"),
                };
                result.push_str(&locale.localize_number(&digits));
            }
            MaskPart::DayName(style) => {
                let names = match style {
                    NameStyle::Short => &locale.day_names_short,
                    NameStyle::Full => &locale.day_names,
                };
                result.push_str(name_at(names, fields.day_of_week as usize));
            }
            MaskPart::MonthName(style) => {
                let names = match style {
                    NameStyle::Short => &locale.month_names_short,
                    NameStyle::Full => &locale.month_names,
                };
                let index = (fields.date.month as usize).wrapping_sub(1);
                result.push_str(name_at(names, index));
            }
            MaskPart::YearShort => {
                // Drops the first two characters, so 1440 prints as 40
                let year = fields.date.year.to_string();
                result.push_str(&locale.localize_number(year.get(2..).unwrap_or_default()));
            }
            MaskPart::Year => {
                result.push_str(&locale.localize_number(&fields.date.year.to_string()));
            }
            MaskPart::Millisecond => {
                let ms = millisecond(time);
                result.push_str(&locale.localize_number(&format!("{ms:03}")));
            }
            MaskPart::Centisecond => {
                // Rounds half up, so .995 and above print 100
                let cs = (millisecond(time) + 5) / 10;
                result.push_str(&locale.localize_number(&format!("{cs:02}")));
            }
            MaskPart::TimeMarker(marker) => {
                let index = marker.index() + usize::from(hour >= 12);
                result.push_str(name_at(&locale.time_names, index));
            }
            MaskPart::Ordinal => {
                result.push_str(&locale.localize_day_number(fields.date.day));
            }
            MaskPart::WeekOfYear => {
                result.push_str(&locale.localize_number(&fields.week_of_year.to_string()));
            }
            MaskPart::DayOfWeek => {
                result.push_str(&locale.localize_number(&fields.day_of_week.to_string()));
            }
        }
    }

    result
}

fn name_at<'a>(names: &[&'a str], index: usize) -> &'a str {
    names.get(index).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fields() -> HijriFields {
        HijriFields {
            date: HijriDate::new(1440, 10, 30),
            week_of_year: 43,
            day_of_week: 3,
        }
    }

    fn render(mask: &str, h: u32, m: u32, s: u32, ms: u32, locale: &Locale) -> String {
        let instant = NaiveDate::from_ymd_opt(2019, 7, 3)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap();
        format_mask(instant, &Mask::parse(mask).unwrap(), locale, &fields())
    }

    #[test]
    fn test_numeric_fields() {
        let en = Locale::en();
        assert_eq!(
            render("dd/MM/yyyy HH:mm:ss.l", 2, 37, 15, 200, &en),
            "30/10/1440 02:37:15.200"
        );
        assert_eq!(render("d M yy", 0, 0, 0, 0, &en), "30 10 40");
    }

    #[test]
    fn test_twelve_hour_clock() {
        let en = Locale::en();
        assert_eq!(render("h hh", 0, 0, 0, 0, &en), "12 12");
        assert_eq!(render("h", 12, 0, 0, 0, &en), "12");
        assert_eq!(render("h:mm TT", 13, 19, 0, 0, &en), "1:19 PM");
        assert_eq!(render("t tt T TT", 9, 0, 0, 0, &en), "a am A AM");
    }

    #[test]
    fn test_centiseconds_round() {
        assert_eq!(render("L", 0, 0, 0, 994, &Locale::en()), "99");
        assert_eq!(render("L", 0, 0, 0, 995, &Locale::en()), "100");
        assert_eq!(render("L", 0, 0, 0, 5, &Locale::en()), "01");
        assert_eq!(render("L", 0, 0, 0, 4, &Locale::en()), "00");
    }

    #[test]
    fn test_names_and_derived_fields() {
        let en = Locale::en();
        assert_eq!(render("dddd, MMMM dS", 0, 0, 0, 0, &en), "Wednesday, Shawwāl 30th");
        assert_eq!(render("ddd MMM", 0, 0, 0, 0, &en), "Wed Shw");
        assert_eq!(render("W N", 0, 0, 0, 0, &en), "43 3");
    }

    #[test]
    fn test_arabic_digits_and_commas() {
        let ar = Locale::ar();
        assert_eq!(render("dd/MM/yyyy", 0, 0, 0, 0, &ar), "٣٠/١٠/١٤٤٠");
        assert_eq!(render("d MMM, yyyy", 0, 0, 0, 0, &ar), "٣٠ شوال، ١٤٤٠");
        assert_eq!(render("S", 0, 0, 0, 0, &ar), "الثلاثون من");
    }
}
