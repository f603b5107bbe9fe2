/// Keyboard traversal over the search result list: either nothing is focused
/// or item k is, and arrow keys wrap modulo the result count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultFocus {
    focused: Option<usize>,
}

impl ResultFocus {
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn move_down(&mut self, count: usize) {
        if count == 0 {
            self.focused = None;
            return;
        }
        self.focused = Some(match self.focused {
            None => 0,
            Some(k) => (k + 1) % count,
        });
    }

    pub fn move_up(&mut self, count: usize) {
        if count == 0 {
            self.focused = None;
            return;
        }
        self.focused = Some(match self.focused {
            None => count - 1,
            Some(k) => (k + count - 1) % count,
        });
    }

    pub fn reset(&mut self) {
        self.focused = None;
    }

    /// Results changed under us; keep the focus only if it still points at a
    /// real row.
    pub fn clamp_to(&mut self, count: usize) {
        if let Some(k) = self.focused {
            if k >= count {
                self.focused = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_wrap_modulo_result_count() {
        let mut focus = ResultFocus::default();
        focus.move_down(3);
        assert_eq!(focus.focused(), Some(0));
        focus.move_down(3);
        focus.move_down(3);
        assert_eq!(focus.focused(), Some(2));
        focus.move_down(3);
        assert_eq!(focus.focused(), Some(0));

        focus.move_up(3);
        assert_eq!(focus.focused(), Some(2));
    }

    #[test]
    fn up_from_nothing_lands_on_the_last_row() {
        let mut focus = ResultFocus::default();
        focus.move_up(4);
        assert_eq!(focus.focused(), Some(3));
    }

    #[test]
    fn empty_results_clear_the_focus() {
        let mut focus = ResultFocus::default();
        focus.move_down(3);
        focus.move_down(0);
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn clamp_drops_out_of_range_focus() {
        let mut focus = ResultFocus::default();
        focus.move_down(10);
        for _ in 0..5 {
            focus.move_down(10);
        }
        assert_eq!(focus.focused(), Some(5));
        focus.clamp_to(3);
        assert_eq!(focus.focused(), None);
        focus.clamp_to(0);
        assert_eq!(focus.focused(), None);
    }
}
