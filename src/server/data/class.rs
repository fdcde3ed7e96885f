//! Scheduled class repository.
//!
//! Classes are always returned fully aggregated. Related rows are loaded in
//! bulk per query (one select per related table) and stitched together in
//! memory, so the number of queries does not grow with the number of classes.

use std::collections::{BTreeSet, HashMap};

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::class::{Class, ClassWithRelations, CreateClassParams};

pub struct ClassRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every class of the given courses, ordered by date, start time then id.
    pub async fn get_by_course_ids(&self, course_ids: &[i32]) -> Result<Vec<Class>, DbErr> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let classes = entity::prelude::Class::find()
            .filter(entity::class::Column::CourseId.is_in(course_ids.to_vec()))
            .order_by_asc(entity::class::Column::Date)
            .order_by_asc(entity::class::Column::StartingTime)
            .order_by_asc(entity::class::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(classes).await
    }

    /// Gets every class held in the given rooms, ordered by date, start time then id.
    pub async fn get_by_room_ids(&self, room_ids: &[i32]) -> Result<Vec<Class>, DbErr> {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }

        let classes = entity::prelude::Class::find()
            .filter(entity::class::Column::RoomId.is_in(room_ids.to_vec()))
            .order_by_asc(entity::class::Column::Date)
            .order_by_asc(entity::class::Column::StartingTime)
            .order_by_asc(entity::class::Column::Id)
            .all(self.db)
            .await?;

        self.load_relations(classes).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Class>, DbErr> {
        let Some(class) = entity::prelude::Class::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.load_relations(vec![class]).await?.into_iter().next())
    }

    /// Inserts a class and links its professors.
    ///
    /// Course, room and professors must exist; the foreign keys reject the
    /// insert otherwise. Returns the id of the new class.
    pub async fn create(&self, params: CreateClassParams) -> Result<i32, DbErr> {
        let class = entity::class::ActiveModel {
            date: ActiveValue::Set(params.date),
            starting_time: ActiveValue::Set(params.starting_time),
            ending_time: ActiveValue::Set(params.ending_time),
            class_type: ActiveValue::Set(params.class_type),
            class_type_en: ActiveValue::Set(params.class_type_en),
            course_id: ActiveValue::Set(params.course_id),
            room_id: ActiveValue::Set(params.room_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for professor_id in params.professor_ids {
            entity::class_professor::ActiveModel {
                class_id: ActiveValue::Set(class.id),
                professor_id: ActiveValue::Set(professor_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(class.id)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Class::find().count(self.db).await
    }

    /// Attaches course, room, professors, groups and group members to each
    /// class, keeping the order of `classes`.
    async fn load_relations(
        &self,
        classes: Vec<entity::class::Model>,
    ) -> Result<Vec<Class>, DbErr> {
        if classes.is_empty() {
            return Ok(Vec::new());
        }

        let class_ids: Vec<i32> = classes.iter().map(|c| c.id).collect();
        let course_ids: Vec<i32> = unique(classes.iter().map(|c| c.course_id));
        let room_ids: Vec<i32> = unique(classes.iter().map(|c| c.room_id));

        let courses: HashMap<i32, entity::course::Model> = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(course_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|course| (course.id, course))
            .collect();

        let rooms: HashMap<i32, entity::room::Model> = entity::prelude::Room::find()
            .filter(entity::room::Column::Id.is_in(room_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|room| (room.id, room))
            .collect();

        let professor_links = entity::prelude::ClassProfessor::find()
            .filter(entity::class_professor::Column::ClassId.is_in(class_ids))
            .all(self.db)
            .await?;
        let professors = self
            .professors_by_id(unique(professor_links.iter().map(|l| l.professor_id)))
            .await?;
        let mut professors_by_class: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in professor_links {
            professors_by_class
                .entry(link.class_id)
                .or_default()
                .push(link.professor_id);
        }

        let group_links = entity::prelude::GroupCourse::find()
            .filter(entity::group_course::Column::CourseId.is_in(course_ids))
            .all(self.db)
            .await?;
        let group_ids = unique(group_links.iter().map(|l| l.group_id));
        let groups: HashMap<i32, entity::group::Model> = if group_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Group::find()
                .filter(entity::group::Column::Id.is_in(group_ids.clone()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|group| (group.id, group))
                .collect()
        };
        let mut groups_by_course: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in group_links {
            groups_by_course
                .entry(link.course_id)
                .or_default()
                .push(link.group_id);
        }

        let members = self.members_by_group(&group_ids).await?;

        let mut result = Vec::with_capacity(classes.len());
        for class in classes {
            let course = courses.get(&class.course_id).cloned().ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Course {} of class {} not found",
                    class.course_id, class.id
                ))
            })?;
            let room = rooms.get(&class.room_id).cloned().ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Room {} of class {} not found",
                    class.room_id, class.id
                ))
            })?;

            let mut class_professors: Vec<entity::professor::Model> = professors_by_class
                .get(&class.id)
                .into_iter()
                .flatten()
                .filter_map(|id| professors.get(id).cloned())
                .collect();
            class_professors.sort_by_key(|p| p.id);

            let mut course_groups: Vec<entity::group::Model> = groups_by_course
                .get(&class.course_id)
                .into_iter()
                .flatten()
                .filter_map(|id| groups.get(id).cloned())
                .collect();
            course_groups.sort_by_key(|g| g.id);

            let groups_with_members = course_groups
                .into_iter()
                .map(|group| {
                    let users = members.get(&group.id).cloned().unwrap_or_default();
                    (group, users)
                })
                .collect();

            result.push(Class::from_with_relations(ClassWithRelations {
                class,
                course,
                room,
                professors: class_professors,
                groups: groups_with_members,
            }));
        }

        Ok(result)
    }

    async fn professors_by_id(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::professor::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Professor::find()
            .filter(entity::professor::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|professor| (professor.id, professor))
            .collect())
    }

    /// Members of each group, ordered by user id.
    async fn members_by_group(
        &self,
        group_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::user::Model>>, DbErr> {
        if group_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let memberships = entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::GroupId.is_in(group_ids.to_vec()))
            .all(self.db)
            .await?;
        let user_ids = unique(memberships.iter().map(|m| m.user_id));
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();

        let mut by_group: HashMap<i32, Vec<entity::user::Model>> = HashMap::new();
        for membership in memberships {
            if let Some(user) = users.get(&membership.user_id) {
                by_group
                    .entry(membership.group_id)
                    .or_default()
                    .push(user.clone());
            }
        }
        for members in by_group.values_mut() {
            members.sort_by_key(|u| u.id);
        }

        Ok(by_group)
    }
}

fn unique(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    ids.collect::<BTreeSet<i32>>().into_iter().collect()
}
