/// One element of the rendered pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Prev { target: u32, enabled: bool },
    Page { number: u32, active: bool },
    Ellipsis,
    Next { target: u32, enabled: bool },
}

const MAX_BUTTONS: u32 = 7;

/// Builds the page-button window: at most 7 numbered buttons centered on
/// `current`, shifted to stay inside `[1, total]`, with first/last page
/// shortcuts and an ellipsis when the window does not reach an edge.
pub fn window(current: u32, total: u32) -> Vec<PageItem> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(MAX_BUTTONS / 2).max(1);
    let mut end = start + MAX_BUTTONS - 1;
    if end > total {
        end = total;
        start = end.saturating_sub(MAX_BUTTONS - 1).max(1);
    }

    let mut items = Vec::new();
    items.push(PageItem::Prev {
        target: current.saturating_sub(1),
        enabled: current > 1,
    });

    if start > 1 {
        items.push(PageItem::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    for number in start..=end {
        items.push(PageItem::Page {
            number,
            active: number == current,
        });
    }

    if end < total {
        if end < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page {
            number: total,
            active: false,
        });
    }

    items.push(PageItem::Next {
        target: current + 1,
        enabled: current < total,
    });

    items
}
