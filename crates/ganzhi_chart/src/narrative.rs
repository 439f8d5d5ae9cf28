//! Text renderings of a chart reading.
//!
//! [`technical_summary`] is the compact six-line summary shown with a chart.
//! [`strategic_context`] is the long English block handed verbatim to the
//! report generator as prompt context.

use std::fmt::{self, Display, Formatter};

use ganzhi_base::{Element, ElementRelation, Language, Polarity};

use crate::chart::ChartReading;
use crate::record::pillars_joined;

/// What to lean on when `element` is overpowering: its controller plus a
/// short activity gloss, e.g. `Metal (structure, systems, discipline)`.
pub fn controller_hint(element: Element) -> String {
    let controller = element.controlled_by();
    let gloss = match controller {
        Element::Metal => "structure, systems, discipline",
        Element::Water => "calm analysis, patience, strategy",
        Element::Wood => "growth, innovation, expansion",
        Element::Fire => "passion, marketing, visibility",
        Element::Earth => "stability, process, grounding",
    };
    format!("{} ({gloss})", controller.name())
}

/// Activities that bring in more of a lacking `element`.
pub const fn element_advice(element: Element) -> &'static str {
    match element {
        Element::Wood => "growth initiatives, education, creative projects, starting new ventures",
        Element::Fire => "networking, marketing, public speaking, raising visibility",
        Element::Earth => "building processes, consolidation, real estate, team stability",
        Element::Metal => "financial planning, technology, legal structures, optimization",
        Element::Water => "research, reflection, travel, building connections behind the scenes",
    }
}

const fn polarity_temperament(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Yang => "They are action-oriented, decisive, and externally driven.",
        Polarity::Yin => "They are strategic, adaptive, and internally driven.",
    }
}

/// How the transit element bears on the Day Master element.
fn transit_relation_line(day_master: Element, transit: Element) -> String {
    let dm = day_master.name();
    let tr = transit.name();
    match ElementRelation::between(day_master, transit) {
        ElementRelation::Same => {
            "SUPPORTS the Day Master directly — a strong personal year".to_string()
        }
        ElementRelation::GeneratedBy => format!(
            "nourishes the {dm} Day Master ({tr} feeds {dm}) — a resource year that replenishes"
        ),
        ElementRelation::Generates => format!(
            "draws on the {dm} Day Master ({dm} feeds {tr}) — an output year that spends reserves"
        ),
        ElementRelation::Controls => format!(
            "is restrained by the {dm} Day Master ({dm} controls {tr}) — effort converts into gains"
        ),
        ElementRelation::ControlledBy => format!(
            "pressures the {dm} Day Master ({tr} controls {dm}) — a year of external pressure and discipline"
        ),
    }
}

/// Element scores as `木=2.0, 火=3.0, ...` in the given order.
fn scores_line<'a>(entries: impl IntoIterator<Item = &'a (Element, f64)>, sep: &str) -> String {
    entries
        .into_iter()
        .map(|(el, score)| format!("{}={score:.1}", el.hanzi()))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Compact technical summary: pillars, day master, zodiac, ranked balance,
/// dominant/weakest, and the year transit. One fact per line.
pub fn technical_summary(reading: &ChartReading) -> String {
    let c = &reading.chart;
    let dm = c.day_master;
    let t = reading.transit;
    [
        format!("四柱: {}", pillars_joined(c, Language::Chinese, " ")),
        format!(
            "日主: {}{} ({} {})",
            dm.stem.hanzi(),
            dm.stem.pinyin(),
            dm.element.name(),
            dm.polarity.name()
        ),
        format!("生肖: {} ({})", c.zodiac.hanzi(), c.zodiac.name()),
        format!("五行强弱: {}", scores_line(&c.balance.ranked(), ", ")),
        format!(
            "最强: {}({}) | 最弱: {}({})",
            c.dominant.hanzi(),
            c.dominant.name(),
            c.weakest.hanzi(),
            c.weakest.name()
        ),
        format!("流年: {} ({})", t, t.english()),
    ]
    .join("\n")
}

/// Long-form strategic context for the report generator.
pub fn strategic_context(reading: &ChartReading) -> String {
    StrategicContext(reading).to_string()
}

/// Renders the strategic context block for one reading.
struct StrategicContext<'a>(&'a ChartReading);

impl Display for StrategicContext<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━";

        let c = &self.0.chart;
        let dm = c.day_master;
        let transit = self.0.transit;
        let transit_element = transit.stem_element();

        writeln!(f)?;
        writeln!(f, "BAZI STRUCTURAL ANALYSIS:")?;
        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Day Master: {} ({} {})",
            dm.stem.pinyin(),
            dm.element.name(),
            dm.polarity.name()
        )?;
        writeln!(
            f,
            "- This person's core energy is {}. {}",
            dm.element.name(),
            polarity_temperament(dm.polarity)
        )?;
        writeln!(f)?;
        writeln!(f, "Four Pillars: {}", pillars_joined(c, Language::English, " | "))?;
        writeln!(f)?;
        writeln!(f, "Zodiac: {} ({})", c.zodiac.name(), c.zodiac.hanzi())?;
        writeln!(f)?;
        writeln!(f, "Element Balance:")?;
        writeln!(
            f,
            "- Dominant: {} ({}) — This person has excess {} energy",
            c.dominant.name(),
            c.dominant.hanzi(),
            c.dominant.name()
        )?;
        writeln!(
            f,
            "- Weakest: {} ({}) — They need more {} to balance",
            c.weakest.name(),
            c.weakest.hanzi(),
            c.weakest.name()
        )?;
        writeln!(f, "- {}", scores_line(&c.balance.entries(), " | "))?;
        writeln!(f)?;
        writeln!(
            f,
            "Current Year Transit: {} ({})",
            transit.english(),
            transit_element.name()
        )?;
        writeln!(
            f,
            "- The {} energy of this year {}",
            transit_element.name(),
            transit_relation_line(dm.element, transit_element)
        )?;
        writeln!(f)?;
        writeln!(f, "STRATEGIC IMPLICATIONS:")?;
        writeln!(
            f,
            "- If {} is overpowering: recommend activities aligned with its controller ({})",
            c.dominant.name(),
            controller_hint(c.dominant)
        )?;
        writeln!(
            f,
            "- If {} is critically low: suggest incorporating {} energy ({})",
            c.weakest.name(),
            c.weakest.name(),
            element_advice(c.weakest)
        )?;
        writeln!(f, "{RULE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::BaziChart;
    use crate::config::ChartConfig;
    use ganzhi_time::{CivilDate, ClockTime};

    fn reading(as_of: (i32, u32, u32)) -> ChartReading {
        BaziChart::assemble(
            CivilDate::new(1990, 6, 15).unwrap(),
            Some(ClockTime::new(14, 30).unwrap()),
            &ChartConfig::default(),
        )
        .reading_on(CivilDate::new(as_of.0, as_of.1, as_of.2).unwrap())
    }

    #[test]
    fn controller_table() {
        assert_eq!(controller_hint(Element::Wood), "Metal (structure, systems, discipline)");
        assert_eq!(controller_hint(Element::Fire), "Water (calm analysis, patience, strategy)");
        assert_eq!(controller_hint(Element::Earth), "Wood (growth, innovation, expansion)");
        assert_eq!(controller_hint(Element::Metal), "Fire (passion, marketing, visibility)");
        assert_eq!(controller_hint(Element::Water), "Earth (stability, process, grounding)");
    }

    #[test]
    fn summary_lines() {
        let s = technical_summary(&reading((2026, 10, 19)));
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(
            lines,
            vec![
                "四柱: 庚午 庚午 辛亥 乙未",
                "日主: 辛Xin (Metal Yin)",
                "生肖: 马 (Horse)",
                "五行强弱: 金=6.0, 火=3.0, 木=2.0, 土=1.5, 水=1.5",
                "最强: 金(Metal) | 最弱: 水(Water)",
                "流年: 丙午 (Bing Wu)",
            ]
        );
    }

    #[test]
    fn context_mentions_every_section() {
        let s = strategic_context(&reading((2026, 10, 19)));
        assert!(s.contains("Day Master: Xin (Metal Yin)"));
        assert!(s.contains("strategic, adaptive, and internally driven"));
        assert!(s.contains("Four Pillars: Geng Wu | Geng Wu | Xin Hai | Yi Wei"));
        assert!(s.contains("Zodiac: Horse (马)"));
        assert!(s.contains("- 木=2.0 | 火=3.0 | 土=1.5 | 金=6.0 | 水=1.5"));
        assert!(s.contains("Current Year Transit: Bing Wu (Fire)"));
        assert!(s.contains("pressures the Metal Day Master (Fire controls Metal)"));
        assert!(s.contains("its controller (Fire (passion, marketing, visibility))"));
        assert!(s.contains("incorporating Water energy (research, reflection"));
    }

    #[test]
    fn context_block_is_framed_by_rules() {
        let s = strategic_context(&reading((2026, 10, 19)));
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "BAZI STRUCTURAL ANALYSIS:");
        assert!(lines[2].starts_with('━'));
        assert!(s.ends_with("━\n"));
        assert_eq!(s.matches("STRATEGIC IMPLICATIONS:").count(), 1);
    }

    #[test]
    fn same_element_transit_supports() {
        // 2020-06-01 transit is Geng Zi: Metal, same as the Xin Day Master.
        let s = strategic_context(&reading((2020, 6, 1)));
        assert!(s.contains("The Metal energy of this year SUPPORTS the Day Master directly"));
    }

    #[test]
    fn relation_lines_cover_all_cases() {
        assert!(transit_relation_line(Element::Metal, Element::Earth).starts_with("nourishes"));
        assert!(transit_relation_line(Element::Metal, Element::Water).starts_with("draws on"));
        assert!(transit_relation_line(Element::Metal, Element::Wood).starts_with("is restrained"));
    }
}
