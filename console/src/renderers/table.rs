use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement,
    Table, TableComponent,
};

/// Box layouts used by the terminal renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Record rows with a rule under the header only
    Records,
    /// One cell boxed on its own, for placeholders and errors
    Message,
}

/// Terminal table with the console's rounded look
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    pub fn with_style(style: TableStyle) -> Self {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .remove_style(TableComponent::HorizontalLines);

        match style {
            TableStyle::Records => {
                table
                    .remove_style(TableComponent::LeftBorderIntersections)
                    .remove_style(TableComponent::RightBorderIntersections)
                    .remove_style(TableComponent::MiddleIntersections);
            }
            TableStyle::Message => {
                table.remove_style(TableComponent::VerticalLines);
            }
        }

        Self { table }
    }

    /// Force ANSI styling on or off regardless of the output stream
    pub fn force_color(&mut self, enabled: bool) -> &mut Self {
        if enabled {
            self.table.enforce_styling();
        } else {
            self.table.force_no_tty();
        }
        self
    }

    /// Column names from the first record, in bold
    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table.set_header(
            headers
                .into_iter()
                .map(|name| Cell::new(name.into()).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
        self
    }

    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table
            .add_row(cells.into_iter().map(|text| Cell::new(text.into())).collect::<Vec<_>>());
        self
    }

    /// Add one styled cell as a row of its own
    pub fn line(&mut self, cell: Cell) -> &mut Self {
        self.table.add_row(vec![cell]);
        self
    }

    pub fn build(self) -> String {
        self.table.to_string()
    }
}

/// Cells for the message box
pub mod cells {
    use super::{Cell, Color};

    /// Red text for request failures
    pub fn error<S: Into<String>>(text: S) -> Cell {
        Cell::new(text.into()).fg(Color::Red)
    }

    /// Grey text for empty states
    pub fn muted<S: Into<String>>(text: S) -> Cell {
        Cell::new(text.into()).fg(Color::DarkGrey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_table() {
        let mut builder = TableBuilder::with_style(TableStyle::Records);
        builder.headers(vec!["id", "name"]);
        builder.row(vec!["1", "Acme"]);
        builder.row(vec!["2", "Globex"]);
        let table = builder.build();

        assert!(table.contains("id"));
        assert!(table.contains("name"));
        assert!(table.contains("Acme"));
        assert!(table.contains("Globex"));
    }

    #[test]
    fn test_message_box_without_color() {
        let mut builder = TableBuilder::with_style(TableStyle::Message);
        builder.force_color(false);
        builder.line(cells::muted("No data returned."));
        let table = builder.build();

        assert!(table.contains("No data returned."));
        assert!(!table.contains('\u{1b}'));
    }

    #[test]
    fn test_forced_color_styles_errors() {
        let mut builder = TableBuilder::with_style(TableStyle::Message);
        builder.force_color(true);
        builder.line(cells::error("Connection refused"));

        assert!(builder.build().contains('\u{1b}'));
    }
}
