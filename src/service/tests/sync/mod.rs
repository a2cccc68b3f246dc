use sea_orm::{EntityTrait, PaginatorTrait};

use matchday_test_utils::prelude::*;

use super::{memory_cache, sync_state, UnavailableCache};
use crate::cache::{keys, ArtifactCache};

mod standings;
