//! Image gallery cursor for detail pages.
//!
//! A finite, restartable cursor over an ordered image list with
//! explicit wrap-around on `next`/`prev` and direct thumbnail
//! selection. The modal-open flag is independent of the index: opening
//! or closing the lightbox never moves the cursor.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryCursor {
    len: usize,
    index: usize,
    modal_open: bool,
}

impl GalleryCursor {
    /// Cursor over `len` images, starting at the first. A zero-length
    /// gallery is legal and stays pinned at index 0.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            modal_open: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Currently selected image index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance, wrapping from the last image to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back, wrapping from the first image to the last.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump directly to a thumbnail. Out-of-range selections clamp to
    /// the last image, so a stale thumbnail click can never leave the
    /// cursor pointing past the gallery.
    pub fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index.min(self.len - 1);
        }
    }

    // ---- modal flag ----

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first() {
        let mut cursor = GalleryCursor::new(3);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.index(), 2);
        cursor.next();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut cursor = GalleryCursor::new(3);
        cursor.prev();
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn select_jumps_within_bounds() {
        let mut cursor = GalleryCursor::new(5);
        cursor.select(3);
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn out_of_range_select_clamps_to_last_image() {
        let mut cursor = GalleryCursor::new(3);
        cursor.select(7);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn clamped_select_still_wraps_forward() {
        let mut cursor = GalleryCursor::new(3);
        cursor.select(7);
        cursor.next();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn empty_gallery_never_moves() {
        let mut cursor = GalleryCursor::new(0);
        cursor.next();
        cursor.prev();
        cursor.select(0);
        assert_eq!(cursor.index(), 0);
        assert!(cursor.is_empty());
    }

    #[test]
    fn modal_flag_is_independent_of_the_index() {
        let mut cursor = GalleryCursor::new(4);
        cursor.select(2);
        cursor.open_modal();
        assert!(cursor.modal_open());
        assert_eq!(cursor.index(), 2);
        cursor.close_modal();
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn single_image_gallery_wraps_onto_itself() {
        let mut cursor = GalleryCursor::new(1);
        cursor.next();
        cursor.prev();
        assert_eq!(cursor.index(), 0);
    }
}
