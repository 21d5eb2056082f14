//! Proposal document export.
//!
//! Renders the live records into a Markdown proposal: cover, mission, venue,
//! one section per gallery record, budget, closing contact.

use crate::model::record::{ContentRecord, ImageSource};
use std::fmt::Write;

const TITLE: &str = "The Collective Oasis";
const EDITION: &str = "TSD SALD 2026";
const SUBTITLE: &str = "Event Proposal & Strategy";

const MISSION: &[&str] = &[
    "To create a sanctuary of thought and innovation. The Collective Oasis isn't just an event; it is a convergence of minds set against a backdrop of serenity.",
    "We aim to bridge the gap between tradition and future technologies in an environment that fosters deep connection.",
];

const VENUE_POINTS: &[&str] = &[
    "Open-air amphitheater for keynote sessions.",
    "Climate-controlled breakout 'tents' for workshops.",
    "Sunset networking lounge featuring local culinary arts.",
    "High-speed connectivity infrastructure disguised within natural elements.",
];

/// (item, allocation, cost)
const BUDGET: &[(&str, &str, &str)] = &[
    ("Venue Rental", "25%", "$50,000"),
    ("Catering (F&B)", "30%", "$60,000"),
    ("AV & Tech", "20%", "$40,000"),
    ("Marketing", "15%", "$30,000"),
    ("Contingency", "10%", "$20,000"),
    ("TOTAL", "100%", "$200,000"),
];

const CONTACT_EMAIL: &str = "planning@tsd-sald2026.com";
const CONTACT_PHONE: &str = "+1 (555) 019-2026";

/// Renders the proposal document for `records`, in the given order.
pub fn render_proposal(records: &[ContentRecord]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_proposal(&mut out, records);
    out
}

fn write_proposal(out: &mut String, records: &[ContentRecord]) -> std::fmt::Result {
    writeln!(out, "# {TITLE}\n")?;
    writeln!(out, "**{EDITION}**\n")?;
    writeln!(out, "_{SUBTITLE}_\n")?;

    writeln!(out, "## Our Mission\n")?;
    for paragraph in MISSION {
        writeln!(out, "{paragraph}\n")?;
    }

    writeln!(out, "## The Venue\n")?;
    writeln!(out, "Located in the heart of the dunes, the venue offers:\n")?;
    for point in VENUE_POINTS {
        writeln!(out, "- {point}")?;
    }
    writeln!(out)?;

    writeln!(out, "## Experience Highlights\n")?;
    for record in records {
        writeln!(out, "### {}\n", record.name)?;
        writeln!(out, "{}\n", record.description.trim())?;
        writeln!(out, "Image: {}\n", ImageSource::classify(&record.image).label())?;
        if !record.sub_items().is_empty() {
            for sub in record.sub_items() {
                writeln!(
                    out,
                    "- {} ({})",
                    sub.name,
                    ImageSource::classify(&sub.image).label()
                )?;
            }
            writeln!(out)?;
        }
    }

    writeln!(out, "## Projected Budget\n")?;
    writeln!(out, "| Item | Allocation | Cost (USD) |")?;
    writeln!(out, "|---|---|---|")?;
    for (item, allocation, cost) in BUDGET {
        writeln!(out, "| {item} | {allocation} | {cost} |")?;
    }
    writeln!(out)?;

    writeln!(out, "## Let's Build the Oasis.\n")?;
    writeln!(out, "Contact: {CONTACT_EMAIL}  ")?;
    writeln!(out, "{CONTACT_PHONE}")?;
    Ok(())
}
