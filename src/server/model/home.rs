//! Home page cards and their nested content blocks.

use std::collections::HashMap;

use crate::{
    model::home::{CardContentDto, CardContentInputDto, CardDto, CardInputDto},
    server::model::language::Language,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: i32,
    pub title: String,
    pub title_en: Option<String>,
    pub css_class: Option<String>,
    pub sort_order: i32,
    /// Top-level blocks ordered by `(sort_order, id)`.
    pub contents: Vec<CardContent>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub id: i32,
    pub content_type: String,
    pub content: Option<String>,
    pub content_en: Option<String>,
    pub url: Option<String>,
    pub css_class: Option<String>,
    pub sort_order: i32,
    pub children: Vec<CardContent>,
}

impl Card {
    /// Builds a card from its row and the flat list of all its content rows.
    pub fn from_entity(
        card: entity::card::Model,
        contents: Vec<entity::card_content::Model>,
    ) -> Self {
        Self {
            id: card.id,
            title: card.title,
            title_en: card.title_en,
            css_class: card.css_class,
            sort_order: card.sort_order,
            contents: build_content_tree(contents),
        }
    }

    pub fn into_dto(self, lang: Language) -> CardDto {
        CardDto {
            id: self.id,
            title: lang.pick(&self.title, self.title_en.as_deref()).to_string(),
            css_class: self.css_class,
            order: self.sort_order,
            contents: self
                .contents
                .into_iter()
                .map(|content| content.into_dto(lang))
                .collect(),
        }
    }
}

impl CardContent {
    fn from_entity(entity: entity::card_content::Model, children: Vec<CardContent>) -> Self {
        Self {
            id: entity.id,
            content_type: entity.content_type,
            content: entity.content,
            content_en: entity.content_en,
            url: entity.url,
            css_class: entity.css_class,
            sort_order: entity.sort_order,
            children,
        }
    }

    pub fn into_dto(self, lang: Language) -> CardContentDto {
        CardContentDto {
            id: self.id,
            content: lang.pick_opt(self.content.as_deref(), self.content_en.as_deref()),
            content_type: self.content_type,
            url: self.url,
            css_class: self.css_class,
            order: self.sort_order,
            children: self
                .children
                .into_iter()
                .map(|child| child.into_dto(lang))
                .collect(),
        }
    }
}

/// Rebuilds the content tree from flat rows.
///
/// Rows without a parent are roots. Siblings are ordered by `(sort_order, id)`.
/// Rows whose parent is not among `rows` are unreachable and dropped. Each row
/// is attached at most once, so malformed parent cycles cannot loop.
pub fn build_content_tree(rows: Vec<entity::card_content::Model>) -> Vec<CardContent> {
    let mut by_parent: HashMap<Option<i32>, Vec<entity::card_content::Model>> = HashMap::new();
    for row in rows {
        by_parent.entry(row.parent_id).or_default().push(row);
    }
    for siblings in by_parent.values_mut() {
        siblings.sort_by_key(|row| (row.sort_order, row.id));
    }

    attach_children(None, &mut by_parent)
}

fn attach_children(
    parent_id: Option<i32>,
    by_parent: &mut HashMap<Option<i32>, Vec<entity::card_content::Model>>,
) -> Vec<CardContent> {
    let Some(siblings) = by_parent.remove(&parent_id) else {
        return Vec::new();
    };

    siblings
        .into_iter()
        .map(|row| {
            let children = attach_children(Some(row.id), by_parent);
            CardContent::from_entity(row, children)
        })
        .collect()
}

/// Parameters for creating or replacing a card with its whole content tree.
#[derive(Debug, Clone)]
pub struct CardParams {
    pub title: String,
    pub title_en: Option<String>,
    pub css_class: Option<String>,
    pub sort_order: i32,
    pub contents: Vec<CardContentParams>,
}

#[derive(Debug, Clone)]
pub struct CardContentParams {
    pub content_type: String,
    pub content: Option<String>,
    pub content_en: Option<String>,
    pub url: Option<String>,
    pub css_class: Option<String>,
    pub sort_order: i32,
    pub children: Vec<CardContentParams>,
}

impl CardParams {
    pub fn from_dto(dto: CardInputDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            title_en: dto.title_en,
            css_class: dto.css_class,
            sort_order: dto.order.unwrap_or(0),
            contents: dto
                .contents
                .into_iter()
                .map(CardContentParams::from_dto)
                .collect(),
        }
    }
}

impl CardContentParams {
    pub fn from_dto(dto: CardContentInputDto) -> Self {
        Self {
            content_type: dto.content_type.trim().to_string(),
            content: dto.content,
            content_en: dto.content_en,
            url: dto.url,
            css_class: dto.css_class,
            sort_order: dto.order.unwrap_or(0),
            children: dto
                .children
                .into_iter()
                .map(CardContentParams::from_dto)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i32, parent_id: Option<i32>, sort_order: i32) -> entity::card_content::Model {
        entity::card_content::Model {
            id,
            card_id: 1,
            parent_id,
            content_type: "text".to_string(),
            content: Some(format!("Bloc {}", id)),
            content_en: (id % 2 == 0).then(|| format!("Block {}", id)),
            url: None,
            css_class: None,
            sort_order,
        }
    }

    fn card() -> entity::card::Model {
        entity::card::Model {
            id: 1,
            title: "Bienvenue".to_string(),
            title_en: None,
            css_class: None,
            sort_order: 0,
        }
    }

    #[test]
    fn nests_children_at_any_depth() {
        let tree = build_content_tree(vec![
            row(4, Some(3), 0),
            row(1, None, 0),
            row(3, Some(1), 0),
            row(2, None, 1),
        ]);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].id, 1);
        assert_eq!(tree[0].children[0].id, 3);
        assert_eq!(tree[0].children[0].children[0].id, 4);
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn orders_siblings_by_order_then_id() {
        let tree = build_content_tree(vec![
            row(7, None, 2),
            row(5, None, 1),
            row(6, None, 1),
            row(3, None, 0),
        ]);

        let ids: Vec<i32> = tree.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 5, 6, 7]);
    }

    #[test]
    fn drops_rows_with_missing_parent_or_cycles() {
        let tree = build_content_tree(vec![
            row(1, None, 0),
            row(2, Some(99), 0),
            row(3, Some(4), 0),
            row(4, Some(3), 0),
        ]);

        assert_eq!(tree.len(), 1);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn localizes_title_and_contents_with_fallback() {
        let dto = Card::from_entity(card(), vec![row(1, None, 0), row(2, Some(1), 0)])
            .into_dto(Language::En);

        // No English title, falls back to base
        assert_eq!(dto.title, "Bienvenue");
        // Odd ids have no English content
        assert_eq!(dto.contents[0].content.as_deref(), Some("Bloc 1"));
        assert_eq!(dto.contents[0].children[0].content.as_deref(), Some("Block 2"));
    }
}
