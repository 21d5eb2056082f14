//! Read-only gallery view model.
//!
//! Cards for every record plus a transient "currently open" detail pointer.
//! The selection lives here, never in the store.

use crate::model::record::{ContentRecord, ImageSource, SubRecord};

/// One gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    /// Display label for the cover image; inline payloads are summarized.
    pub image_label: String,
    pub sub_item_count: usize,
}

/// Expanded view of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailView<'a> {
    pub record: &'a ContentRecord,
}

impl<'a> DetailView<'a> {
    pub fn sub_items(&self) -> &'a [SubRecord] {
        self.record.sub_items()
    }
}

/// Gallery over a borrowed record sequence.
#[derive(Debug)]
pub struct Gallery<'a> {
    records: &'a [ContentRecord],
    selected: Option<usize>,
}

impl<'a> Gallery<'a> {
    pub fn new(records: &'a [ContentRecord]) -> Self {
        Self {
            records,
            selected: None,
        }
    }

    pub fn cards(&self) -> Vec<CardView<'a>> {
        self.records
            .iter()
            .map(|record| CardView {
                id: &record.id,
                name: &record.name,
                description: &record.description,
                image_label: ImageSource::classify(&record.image).label(),
                sub_item_count: record.sub_items().len(),
            })
            .collect()
    }

    /// Opens the detail view for `id`. Unknown ids close any open view.
    pub fn select(&mut self, id: &str) -> Option<DetailView<'a>> {
        self.selected = self.records.iter().position(|record| record.id == id);
        self.selected()
    }

    pub fn selected(&self) -> Option<DetailView<'a>> {
        let records = self.records;
        self.selected.map(|index| DetailView {
            record: &records[index],
        })
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::Gallery;
    use crate::model::defaults::default_records;

    #[test]
    fn cards_follow_record_order() {
        let gallery = Gallery::new(default_records());
        let cards = gallery.cards();
        assert_eq!(cards.len(), default_records().len());
        assert_eq!(cards[0].name, "Welcoming Archway");
        assert_eq!(cards[7].sub_item_count, 4);
    }

    #[test]
    fn select_and_close_manage_transient_selection() {
        let mut gallery = Gallery::new(default_records());
        assert!(gallery.selected().is_none());

        let detail = gallery.select("8").unwrap();
        assert_eq!(detail.record.name, "Games Area");
        assert_eq!(detail.sub_items().len(), 4);
        assert!(gallery.selected().is_some());

        gallery.close();
        assert!(gallery.selected().is_none());

        gallery.select("8");
        assert!(gallery.select("nope").is_none());
        assert!(gallery.selected().is_none());
    }
}
