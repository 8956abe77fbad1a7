use crate::model::ids::ItemId;

/// A unit of practice content that can be walked through in rounds.
///
/// The round engine only ever looks at the identifier; the remaining payload
/// belongs to whatever renders the item.
pub trait PracticeItem {
    fn item_id(&self) -> &ItemId;
}

impl<T: PracticeItem + ?Sized> PracticeItem for &T {
    fn item_id(&self) -> &ItemId {
        (**self).item_id()
    }
}
