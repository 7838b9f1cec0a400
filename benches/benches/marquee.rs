// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_marquee::{
    FrameToken, InputEvent, Listener, Marquee, MarqueeConfig, MarqueeHost, TrackSurface,
};

struct Strip {
    widths: Vec<f64>,
    offset: f64,
}

impl TrackSurface for Strip {
    fn item_count(&self) -> usize {
        self.widths.len()
    }

    fn duplicate_items(&mut self) {
        self.widths.extend_from_within(..);
    }

    fn truncate_items(&mut self, len: usize) {
        self.widths.truncate(len);
    }

    fn item_outer_width(&self, index: usize) -> f64 {
        self.widths[index]
    }

    fn scroll_width(&self) -> f64 {
        self.widths.iter().sum()
    }

    fn set_offset(&mut self, x: f64) {
        self.offset = x;
    }
}

struct Page {
    strip: Strip,
    scroll_y: f64,
    next_frame: u64,
}

impl MarqueeHost for Page {
    type Track = Strip;

    fn track(&self) -> Option<&Strip> {
        Some(&self.strip)
    }

    fn track_mut(&mut self) -> Option<&mut Strip> {
        Some(&mut self.strip)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn listen(&mut self, _: Listener) {}

    fn unlisten(&mut self, _: Listener) {}

    fn request_frame(&mut self) -> FrameToken {
        self.next_frame += 1;
        FrameToken(self.next_frame)
    }

    fn cancel_frame(&mut self, _: FrameToken) {}
}

fn page(items: usize) -> Page {
    Page {
        strip: Strip {
            // Uneven widths so the period is not a round number.
            widths: (0..items).map(|i| 80.0 + (i % 7) as f64 * 13.5).collect(),
            offset: 0.0,
        },
        scroll_y: 0.0,
        next_frame: 0,
    }
}

fn attach(page: Page) -> Marquee<Page> {
    Marquee::attach(page, MarqueeConfig::default()).expect("bench page has items")
}

fn bench_marquee(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_marquee");
    group.sample_size(50);

    for &items in &[8_usize, 64, 512] {
        group.bench_function(format!("attach(items={items})"), |b| {
            b.iter_batched(
                || page(items),
                |page| black_box(attach(page)),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("frames_1000(items={items})"), |b| {
            b.iter_batched(
                || attach(page(items)),
                |mut marquee| {
                    for t in 0..1_000_u64 {
                        marquee.on_frame(t * 16);
                    }
                    black_box(marquee.position());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("scroll_boosted_frames_1000", |b| {
        b.iter_batched(
            || attach(page(16)),
            |mut marquee| {
                let mut y = 0.0;
                for t in 0..1_000_u64 {
                    // Alternate direction every 50 frames.
                    y += if (t / 50) % 2 == 0 { 12.0 } else { -12.0 };
                    marquee.handle_event(InputEvent::Scroll { y }, t * 16);
                    marquee.on_frame(t * 16);
                }
                black_box(marquee.current_speed());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("resize_burst_then_frames_100", |b| {
        b.iter_batched(
            || attach(page(64)),
            |mut marquee| {
                for t in 0..50_u64 {
                    marquee.handle_event(InputEvent::Resize, t);
                }
                for t in 0..100_u64 {
                    marquee.on_frame(50 + t * 16);
                }
                black_box(marquee.loop_period());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("touch_drag_200_moves", |b| {
        b.iter_batched(
            || attach(page(16)),
            |mut marquee| {
                marquee.handle_event(InputEvent::TouchStart(Point::new(500.0, 300.0)), 0);
                for i in 0..200_u64 {
                    let point = Point::new(500.0 - i as f64 * 7.0, 300.0 + (i % 3) as f64);
                    black_box(marquee.handle_event(InputEvent::TouchMove(point), i));
                }
                marquee.handle_event(InputEvent::TouchEnd, 200);
                black_box(marquee.position());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_marquee);
criterion_main!(benches);
