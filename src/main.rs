use bevy::{log::LogPlugin, prelude::*};
use std::path::PathBuf;

use tileforge::tiles::{load_tables_or_default, DEFAULT_TABLE_PATH, KEY_GRASS, KEY_WATER};
use tileforge::{Tile, TileFactory};

/// Key that is not in the built-in tables, to show unresolved tiles
const DEMO_UNKNOWN_KEY: &str = "lava";

fn main() {
    // First argument overrides the table file location
    let table_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_PATH));
    let tables = load_tables_or_default(&table_path);

    App::new()
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(TileFactory::with_tables(tables))
        .add_systems(Startup, spawn_tiles)
        .add_systems(Update, (retype_grass, report_tiles, exit_after_report).chain())
        .run();
}

/// Spawn one tile per known key plus one unknown key
fn spawn_tiles(mut commands: Commands, factory: Res<TileFactory>) {
    let keys = factory.tables().keys();
    for key in keys.iter().copied().chain([DEMO_UNKNOWN_KEY]) {
        commands.spawn(factory.create_instance(key));
    }
    info!("Spawned {} tiles", keys.len() + 1);
}

/// Turn every grass tile into water
fn retype_grass(factory: Res<TileFactory>, mut tiles: Query<&mut Tile>) {
    let grass = factory.tables().tile_type(KEY_GRASS);
    for mut tile in &mut tiles {
        if grass.is_some() && tile.tile_type() == grass {
            tile.set_tile_type(KEY_WATER, factory.tables());
            info!("Retyped tile {} to {}", tile.id(), KEY_WATER);
        }
    }
}

fn report_tiles(tiles: Query<(Entity, &Tile)>) {
    for (entity, tile) in &tiles {
        match (tile.tile_type(), tile.color()) {
            (Some(tile_type), Some(color)) => {
                info!("{:?}: tile {} type {} color {}", entity, tile.id(), tile_type, color)
            }
            _ => warn!("{:?}: tile {} is unresolved", entity, tile.id()),
        }
    }
}

fn exit_after_report(mut exit: MessageWriter<AppExit>) {
    exit.write(AppExit::Success);
}
