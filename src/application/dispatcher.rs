use std::sync::Arc;

use serde::Deserialize;

use crate::domain::entities::Anime;
use crate::shared::application::UseCase;
use crate::shared::errors::AppResult;

use super::services::AnimeService;
use super::use_cases::{
    CreateAnime, CreateAnimeHandler, DeleteAnime, DeleteAnimeHandler, GetAllAnimes,
    GetAllAnimesHandler, GetAnimeById, GetAnimeByIdHandler, GetAnimesByDirector,
    GetAnimesByDirectorHandler, GetAnimesByName, GetAnimesByNameHandler, UpdateAnime,
    UpdateAnimeHandler,
};

/// Every request the core accepts, one variant per use case. The boundary
/// constructs these from transport input; the dispatcher routes each to its
/// single handler.
#[derive(Debug, Clone, Deserialize)]
pub enum AnimeRequest {
    Create(CreateAnime),
    Update(UpdateAnime),
    Delete(DeleteAnime),
    GetAll(GetAllAnimes),
    GetById(GetAnimeById),
    GetByName(GetAnimesByName),
    GetByDirector(GetAnimesByDirector),
}

/// The result shapes declared by the request variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimeResponse {
    Created(Anime),
    Updated(bool),
    Deleted(bool),
    Animes(Vec<Anime>),
    MaybeAnime(Option<Anime>),
}

/// Routes each request to exactly one handler via an exhaustive match over
/// the request union, instead of a reflection-style mediator lookup.
pub struct AnimeDispatcher {
    create: CreateAnimeHandler,
    update: UpdateAnimeHandler,
    delete: DeleteAnimeHandler,
    get_all: GetAllAnimesHandler,
    get_by_id: GetAnimeByIdHandler,
    get_by_name: GetAnimesByNameHandler,
    get_by_director: GetAnimesByDirectorHandler,
}

impl AnimeDispatcher {
    pub fn new(service: Arc<AnimeService>) -> Self {
        Self {
            create: CreateAnimeHandler::new(Arc::clone(&service)),
            update: UpdateAnimeHandler::new(Arc::clone(&service)),
            delete: DeleteAnimeHandler::new(Arc::clone(&service)),
            get_all: GetAllAnimesHandler::new(Arc::clone(&service)),
            get_by_id: GetAnimeByIdHandler::new(Arc::clone(&service)),
            get_by_name: GetAnimesByNameHandler::new(Arc::clone(&service)),
            get_by_director: GetAnimesByDirectorHandler::new(service),
        }
    }

    /// Single dispatch entry point: returns the request's declared result
    /// shape or the typed failure raised by its handler, unmodified.
    pub async fn dispatch(&self, request: AnimeRequest) -> AppResult<AnimeResponse> {
        match request {
            AnimeRequest::Create(command) => self
                .create
                .execute(command)
                .await
                .map(AnimeResponse::Created),
            AnimeRequest::Update(command) => self
                .update
                .execute(command)
                .await
                .map(AnimeResponse::Updated),
            AnimeRequest::Delete(command) => self
                .delete
                .execute(command)
                .await
                .map(AnimeResponse::Deleted),
            AnimeRequest::GetAll(query) => {
                self.get_all.execute(query).await.map(AnimeResponse::Animes)
            }
            AnimeRequest::GetById(query) => self
                .get_by_id
                .execute(query)
                .await
                .map(AnimeResponse::MaybeAnime),
            AnimeRequest::GetByName(query) => self
                .get_by_name
                .execute(query)
                .await
                .map(AnimeResponse::Animes),
            AnimeRequest::GetByDirector(query) => self
                .get_by_director
                .execute(query)
                .await
                .map(AnimeResponse::Animes),
        }
    }
}
