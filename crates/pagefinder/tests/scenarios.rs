use glam::Vec2;
use pagefinder::game::sounds::{self, events};
use pagefinder::*;

const DT: f32 = 1.0 / 60.0;

fn start() -> (PageFinder, EngineContext) {
    let mut game = PageFinder::with_defaults().unwrap();
    let mut ctx = EngineContext::new();
    game.init(&mut ctx);
    (game, ctx)
}

/// One tick with per-frame data cleared first, as the runner does.
fn tick(game: &mut PageFinder, ctx: &mut EngineContext, input: InputSnapshot) {
    ctx.clear_frame_data();
    game.update(ctx, &input, DT);
}

fn actor<'a>(game: &PageFinder, ctx: &'a EngineContext) -> &'a Entity {
    ctx.scene.get(game.actor_id().unwrap()).unwrap()
}

fn actor_mut<'a>(game: &PageFinder, ctx: &'a mut EngineContext) -> &'a mut Entity {
    ctx.scene.get_mut(game.actor_id().unwrap()).unwrap()
}

fn goal_pos(game: &PageFinder, ctx: &EngineContext) -> Vec2 {
    ctx.scene.get(game.goal_id().unwrap()).unwrap().pos
}

fn dst(instance: &RenderInstance) -> PixelRect {
    PixelRect::new(
        instance.dst_x as i32,
        instance.dst_y as i32,
        instance.dst_w as i32,
        instance.dst_h as i32,
    )
}

fn count(ctx: &EngineContext, cue: SoundEvent) -> usize {
    ctx.sounds.iter().filter(|&&s| s == cue).count()
}

#[test]
fn spawn_settles_onto_first_floor() {
    let (mut game, mut ctx) = start();
    tick(&mut game, &mut ctx, InputSnapshot::idle());

    let a = actor(&game, &ctx);
    assert_eq!(collision_rect(a).bottom(), 440);
    assert_eq!(a.vel.y, 0.0);
    assert!(a.actor().unwrap().is_grounded());
    assert_eq!(count(&ctx, sounds::BUMP), 1);
}

#[test]
fn walking_on_flat_ground_keeps_feet_on_surface() {
    let (mut game, mut ctx) = start();
    tick(&mut game, &mut ctx, InputSnapshot::idle());

    for _ in 0..60 {
        tick(&mut game, &mut ctx, InputSnapshot::right());
        assert_eq!(collision_rect(actor(&game, &ctx)).bottom(), 440);
    }
    assert!(actor(&game, &ctx).pos.x > 200.0);
}

#[test]
fn holding_jump_gives_one_jump() {
    let (mut game, mut ctx) = start();
    tick(&mut game, &mut ctx, InputSnapshot::idle());

    tick(&mut game, &mut ctx, InputSnapshot::jump());
    assert_eq!(count(&ctx, sounds::JUMP), 1);
    assert!(actor(&game, &ctx).actor().unwrap().jumping);

    // keep holding through the whole arc and the landing
    let mut jumps = 0;
    for _ in 0..120 {
        tick(&mut game, &mut ctx, InputSnapshot::jump());
        jumps += count(&ctx, sounds::JUMP);
    }
    assert_eq!(jumps, 0);
    let state = *actor(&game, &ctx).actor().unwrap();
    assert!(state.is_grounded());
    assert!(state.jump_held);

    // release then press again
    tick(&mut game, &mut ctx, InputSnapshot::idle());
    tick(&mut game, &mut ctx, InputSnapshot::jump());
    assert_eq!(count(&ctx, sounds::JUMP), 1);
}

#[test]
fn falling_out_with_lives_left_respawns_on_same_level() {
    let (mut game, mut ctx) = start();
    game.set_level(&mut ctx, 2);
    actor_mut(&game, &mut ctx).pos = Vec2::new(400.0, 501.0);

    tick(&mut game, &mut ctx, InputSnapshot::idle());

    let a = actor(&game, &ctx);
    assert_eq!(a.actor().unwrap().lives, 2);
    assert_eq!(a.pos, Vec2::new(60.0, 400.0));
    assert_eq!(a.vel, Vec2::ZERO);
    assert_eq!(game.level_index(), 2);
    assert_eq!(ctx.events, vec![GameEvent::new(events::LIFE_LOST, 2.0)]);
}

#[test]
fn falling_out_on_last_life_restarts_run() {
    let (mut game, mut ctx) = start();
    game.set_level(&mut ctx, 4);
    {
        let a = actor_mut(&game, &mut ctx);
        a.pos = Vec2::new(400.0, 501.0);
        a.actor_mut().unwrap().lives = 1;
    }

    tick(&mut game, &mut ctx, InputSnapshot::idle());

    let a = actor(&game, &ctx);
    let state = a.actor().unwrap();
    assert_eq!(state.lives, 3);
    assert!(state.falling && !state.jumping && !state.walking);
    assert_eq!(a.pos, Vec2::new(60.0, 400.0));
    assert_eq!(game.level_index(), 0);
    assert_eq!(goal_pos(&game, &ctx), Vec2::new(200.0, 200.0));
    assert!(ctx.scene.slice(game.level_range(0).unwrap()).iter().all(|e| e.active));
    assert!(ctx.scene.slice(game.level_range(4).unwrap()).iter().all(|e| !e.active));
    assert_eq!(ctx.events, vec![GameEvent::new(events::GAME_OVER, 0.0)]);
}

#[test]
fn touching_page_advances_level_once() {
    let (mut game, mut ctx) = start();
    actor_mut(&game, &mut ctx).pos = Vec2::new(200.0, 180.0);

    tick(&mut game, &mut ctx, InputSnapshot::idle());

    assert_eq!(game.level_index(), 1);
    assert_eq!(goal_pos(&game, &ctx), Vec2::new(400.0, 200.0));
    assert_eq!(actor(&game, &ctx).pos, Vec2::new(60.0, 400.0));
    assert_eq!(count(&ctx, sounds::FANFARE), 1);
    assert_eq!(ctx.events, vec![GameEvent::new(events::LEVEL_ADVANCED, 1.0)]);

    tick(&mut game, &mut ctx, InputSnapshot::idle());
    assert_eq!(count(&ctx, sounds::FANFARE), 0);
    assert_eq!(game.level_index(), 1);
}

#[test]
fn last_page_wraps_to_first_level() {
    let (mut game, mut ctx) = start();
    game.set_level(&mut ctx, 8);
    assert_eq!(goal_pos(&game, &ctx), Vec2::new(810.0, 500.0));
    actor_mut(&game, &mut ctx).pos = Vec2::new(810.0, 480.0);

    tick(&mut game, &mut ctx, InputSnapshot::idle());

    assert_eq!(game.level_index(), 0);
    assert_eq!(goal_pos(&game, &ctx), Vec2::new(200.0, 200.0));
    assert_eq!(actor(&game, &ctx).actor().unwrap().lives, 3);
    assert_eq!(count(&ctx, sounds::FANFARE), 1);
}

#[test]
fn hud_follows_progress() {
    let (mut game, mut ctx) = start();
    actor_mut(&game, &mut ctx).pos = Vec2::new(200.0, 180.0);
    tick(&mut game, &mut ctx, InputSnapshot::idle());

    let hud = game.hud(&ctx.scene);
    assert_eq!(hud.level_label(), "level 2");
    assert_eq!(hud.lives_glyphs(), "111");
}

#[test]
fn runner_drives_full_frames() {
    let mut runner = GameRunner::new(PageFinder::with_defaults().unwrap());
    runner.init();

    runner.tick(DT);
    assert_eq!(runner.sounds(), &[sounds::BUMP]);
    // level 1 platforms + page + player
    let level = LevelSet::builtin().unwrap();
    assert_eq!(
        runner.render_buffer().instance_count() as usize,
        level.levels[0].platforms.len() + 2
    );

    runner.push_input(InputEvent::KeyDown { key_code: keys::SPACE });
    runner.tick(DT);
    assert_eq!(runner.sounds(), &[sounds::JUMP]);

    runner.push_input(InputEvent::KeyUp { key_code: keys::SPACE });
    runner.push_input(InputEvent::KeyDown { key_code: keys::ESCAPE });
    runner.tick(DT);
    assert!(runner.should_exit());
}

#[test]
fn player_draws_last_over_page_and_platforms() {
    let mut runner = GameRunner::new(PageFinder::with_defaults().unwrap());
    runner.init();
    runner.tick(DT);

    let scene = &runner.context().scene;
    let game = runner.game();
    let player = scene.get(game.actor_id().unwrap()).unwrap();
    let page = scene.get(game.goal_id().unwrap()).unwrap();

    let instances = &runner.render_buffer().instances;
    let n = instances.len();
    let last = &instances[n - 1];
    let before = &instances[n - 2];
    assert_eq!(dst(last), draw_rect(player));
    assert_eq!(dst(before), draw_rect(page));
    // every earlier instance is a platform on the platform sheet
    let platform_sheet = instances[0].sheet;
    assert!(instances[..n - 2].iter().all(|i| i.sheet == platform_sheet));
    assert_ne!(last.sheet, platform_sheet);
}

#[test]
fn runner_level_select_swaps_render_set() {
    let mut runner = GameRunner::new(PageFinder::with_defaults().unwrap());
    runner.init();
    {
        let (game, ctx) = runner.parts_mut();
        game.set_level(ctx, 8);
    }
    runner.tick(DT);

    let level = LevelSet::builtin().unwrap();
    assert_eq!(
        runner.render_buffer().instance_count() as usize,
        level.levels[8].platforms.len() + 2
    );
}

#[test]
fn collision_overlay_reaches_render_buffer() {
    let config = PageFinderConfig::from_json(r#"{ "debug_collision": true }"#).unwrap();
    let registry = SpriteRegistry::from_manifest(&AssetManifest::builtin().unwrap());
    let game = PageFinder::new(config, LevelSet::builtin().unwrap(), &registry).unwrap();
    let mut runner = GameRunner::new(game);
    runner.init();
    runner.tick(DT);

    let buffer = runner.render_buffer();
    assert_eq!(buffer.collision_boxes.len(), buffer.instances.len());
    assert!(buffer.collision_boxes.contains(&PixelRect::new(1, 440, 96, 32)));
}
