/// Single-open accordion state for the FAQ list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Opens `index`, or closes it when it is already the open item.
    /// Opening one item closes whichever was open before.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_collapsed() {
        let accordion = Accordion::default();
        assert_eq!(accordion, Accordion { open: None });
        assert!(!accordion.is_open(0));
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut accordion = Accordion::default();
        accordion.toggle(3);
        assert!(accordion.is_open(3));
        accordion.toggle(3);
        assert_eq!(accordion, Accordion::default());
    }

    #[test]
    fn opening_another_closes_previous() {
        let mut accordion = Accordion::default();
        accordion.toggle(0);
        accordion.toggle(5);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(5));
        assert_eq!(accordion, Accordion { open: Some(5) });
    }
}
