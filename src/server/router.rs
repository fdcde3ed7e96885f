use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        absence::{AbsenceDto, CreateAbsenceDto, UpdateAbsenceStatusDto},
        api::{ErrorDto, HealthDto},
        auth::{
            LoginDto, LoginResponseDto, LoginUserDto, RegisterDto, RegisterResponseDto,
            RegisteredUserDto, TokenDto,
        },
        class::{AttendeeDto, ClassDto, CreateClassDto, CreateClassResponseDto},
        directory::{CourseDto, GroupDto, ProfessorDto, RoomDto},
        home::{CardContentDto, CardContentInputDto, CardDto, CardInputDto},
        user::{ProfileDto, UpdateProfileDto},
    },
    server::{
        controller::{absence, auth, class, directory, health, home, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::login,
        auth::register,
        class::get_user_classes,
        class::get_group_classes,
        class::get_room_classes,
        class::add_class,
        directory::get_groups,
        directory::get_rooms,
        directory::get_courses,
        directory::get_professors,
        absence::get_absences,
        absence::get_user_absences,
        absence::create_absence,
        absence::update_absence_status,
        home::get_cards,
        home::get_card,
        home::create_card,
        home::update_card,
        home::delete_card,
        user::get_profile,
        user::update_profile,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        LoginDto,
        LoginUserDto,
        TokenDto,
        LoginResponseDto,
        RegisterDto,
        RegisteredUserDto,
        RegisterResponseDto,
        AttendeeDto,
        ClassDto,
        CreateClassDto,
        CreateClassResponseDto,
        GroupDto,
        RoomDto,
        CourseDto,
        ProfessorDto,
        AbsenceDto,
        CreateAbsenceDto,
        UpdateAbsenceStatusDto,
        CardDto,
        CardContentDto,
        CardInputDto,
        CardContentInputDto,
        ProfileDto,
        UpdateProfileDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (
            name = "onboard",
            description = "Campus portal API: timetables, absences and home page content."
        )
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/classes/user", get(class::get_user_classes))
        .route("/classes/group", get(class::get_group_classes))
        .route("/classes/rooms", get(class::get_room_classes))
        .route("/classes/addclass", post(class::add_class))
        .route("/groups", get(directory::get_groups))
        .route("/rooms", get(directory::get_rooms))
        .route("/courses", get(directory::get_courses))
        .route("/professors", get(directory::get_professors))
        .route(
            "/absences",
            get(absence::get_absences).post(absence::create_absence),
        )
        .route("/absences/user", get(absence::get_user_absences))
        .route("/absences/{id}/status", put(absence::update_absence_status))
        .route("/home/cards", get(home::get_cards).post(home::create_card))
        .route(
            "/home/cards/{id}",
            get(home::get_card)
                .put(home::update_card)
                .delete(home::delete_card),
        )
        .route(
            "/user/profile",
            get(user::get_profile).put(user::update_profile),
        )
}
