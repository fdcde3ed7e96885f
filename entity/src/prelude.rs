pub use super::absence::Entity as Absence;
pub use super::card::Entity as Card;
pub use super::card_content::Entity as CardContent;
pub use super::class::Entity as Class;
pub use super::class_professor::Entity as ClassProfessor;
pub use super::course::Entity as Course;
pub use super::group::Entity as Group;
pub use super::group_course::Entity as GroupCourse;
pub use super::professor::Entity as Professor;
pub use super::room::Entity as Room;
pub use super::user::Entity as User;
pub use super::user_group::Entity as UserGroup;
