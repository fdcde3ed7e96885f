mod absence;
mod class;
mod course;
mod group;
mod home;
mod professor;
mod room;
mod user;
