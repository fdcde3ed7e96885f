//! Reference data: groups, rooms, courses and professors.

use crate::{
    model::directory::{CourseDto, GroupDto, ProfessorDto, RoomDto},
    server::model::language::Language,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub name_en: Option<String>,
}

impl Group {
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            name_en: entity.name_en,
        }
    }

    pub fn into_dto(self, lang: Language) -> GroupDto {
        GroupDto {
            id: self.id,
            name: lang.pick(&self.name, self.name_en.as_deref()).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub name: String,
}

impl Room {
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub name_en: Option<String>,
}

impl Course {
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            name_en: entity.name_en,
        }
    }

    pub fn into_dto(self, lang: Language) -> CourseDto {
        CourseDto {
            id: self.id,
            name: lang.pick(&self.name, self.name_en.as_deref()).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Professor {
    pub id: i32,
    pub name: String,
}

impl Professor {
    pub fn from_entity(entity: entity::professor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ProfessorDto {
        ProfessorDto {
            id: self.id,
            name: self.name,
        }
    }
}
