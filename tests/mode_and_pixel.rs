mod common;

use common::{Call, ScriptedDevice};
use vgabios::{plot_pixel, set_display_mode, ModeCode, Registers, VideoAdapter};

fn mode_call(code: u8) -> Call {
    Call { vector: 0x10, regs: Registers { ah: 0, al: code, cx: 0, dx: 0 } }
}

fn pixel_call(x: u16, y: u16, color: u8) -> Call {
    Call { vector: 0x10, regs: Registers { ah: 0x0C, al: color, cx: x, dx: y } }
}

#[test]
fn every_mode_code_is_one_call() {
    for code in 0..=255u8 {
        let mut dev = ScriptedDevice::default();
        set_display_mode(&mut dev, ModeCode(code));
        assert_eq!(dev.calls, vec![mode_call(code)]);
        assert_eq!(dev.reads, 0);
    }
}

#[test]
fn same_mode_twice_is_sent_twice() {
    let mut dev = ScriptedDevice::default();
    set_display_mode(&mut dev, ModeCode(3));
    set_display_mode(&mut dev, ModeCode(3));
    assert_eq!(dev.calls, vec![mode_call(3), mode_call(3)]);
}

#[test]
fn pixel_parameters_are_kept_in_order() {
    let mut dev = ScriptedDevice::default();
    plot_pixel(&mut dev, 100, 50, 7);
    plot_pixel(&mut dev, 50, 100, 9);
    assert_eq!(dev.calls, vec![pixel_call(100, 50, 7), pixel_call(50, 100, 9)]);
}

#[test]
fn screen_corners_go_out_untouched() {
    let mut dev = ScriptedDevice::default();
    plot_pixel(&mut dev, 0, 0, 0);
    plot_pixel(&mut dev, 319, 199, 255);
    assert_eq!(dev.calls, vec![pixel_call(0, 0, 0), pixel_call(319, 199, 255)]);
}

#[test]
fn off_screen_pixels_are_not_clamped() {
    let mut dev = ScriptedDevice::default();
    plot_pixel(&mut dev, 320, 200, 12);
    plot_pixel(&mut dev, 65535, 40000, 1);
    assert_eq!(dev.calls, vec![pixel_call(320, 200, 12), pixel_call(65535, 40000, 1)]);
}

#[test]
fn pixels_in_text_mode_are_still_forwarded() {
    let mut adapter = VideoAdapter::new(ScriptedDevice::default());
    adapter.enter_text_mode();
    adapter.plot_pixel(4, 4, 4);
    assert_eq!(adapter.device().calls, vec![mode_call(3), pixel_call(4, 4, 4)]);
}
