// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP endpoints and entities using wiremock.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use smart_clock_lib::protocol::{HttpClient, HttpConfig};
use smart_clock_lib::setup::{ConfigFlow, FlowResult, SetupInput, validate_input};
use smart_clock_lib::types::{BinaryStatus, Brightness, HostBrightness, Tab};
use smart_clock_lib::{
    ClientError, CommandOutcome, Commandable, EntityCommand, EntityKind, EntityState, Error,
    Pollable, PollOutcome, SmartClock,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> HttpConfig {
    let addr = server.address();
    HttpConfig::new(addr.ip().to_string()).with_port(addr.port())
}

fn client_for(server: &MockServer) -> HttpClient {
    config_for(server).into_client().unwrap()
}

fn clock_for(server: &MockServer) -> Arc<SmartClock> {
    SmartClock::with_config(config_for(server))
        .build_without_probe()
        .unwrap()
}

fn setup_input_for(server: &MockServer) -> SetupInput {
    let addr = server.address();
    SetupInput::new(addr.ip().to_string()).with_port(addr.port())
}

/// A local port with nothing listening on it.
fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

async fn mount_json(server: &MockServer, verb: &str, route: &str, body: serde_json::Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, verb: &str, route: &str, status: u16) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

// ============================================================================
// HttpClient Tests
// ============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn get_brightness() {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/api/brightness", json!({"brightness": 42})).await;

        let level = client_for(&server).get_brightness().await.unwrap();
        assert_eq!(level.value(), 42);
    }

    #[tokio::test]
    async fn get_brightness_clamps_out_of_range() {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/api/brightness", json!({"brightness": 150})).await;

        let level = client_for(&server).get_brightness().await.unwrap();
        assert_eq!(level, Brightness::MAX);
    }

    #[tokio::test]
    async fn set_brightness_posts_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/brightness/set"))
            .and(body_json(json!({"brightness": 80})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .set_brightness(Brightness::new(80).unwrap())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn get_tab_missing_field_defaults_to_clock() {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/api/tab", json!({})).await;

        assert_eq!(client_for(&server).get_tab().await.unwrap(), Tab::Clock);
    }

    #[tokio::test]
    async fn set_tab_posts_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tab/set"))
            .and(body_json(json!({"tab": "settings"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).set_tab(Tab::Settings).await.unwrap();
    }

    #[tokio::test]
    async fn refresh_posts_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/refresh"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).refresh().await.unwrap();
    }

    #[tokio::test]
    async fn snap_status() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "GET",
            "/api/snap/status",
            json!({"running": true, "message": "connected to server"}),
        )
        .await;

        let response = client_for(&server).snap_status().await.unwrap();
        assert!(response.is_running());
        assert_eq!(response.status(), BinaryStatus::Running);
        assert_eq!(response.message(), Some("connected to server"));
    }

    #[tokio::test]
    async fn device_config_timezone() {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/api/config", json!({"timezone": "Europe/Paris"})).await;

        let config = client_for(&server).device_config().await.unwrap();
        assert_eq!(config.timezone(), "Europe/Paris");
    }

    #[tokio::test]
    async fn non_200_is_bad_status() {
        let server = MockServer::start().await;
        mount_status(&server, "GET", "/api/brightness", 500).await;
        mount_status(&server, "POST", "/api/tab/set", 204).await;

        let client = client_for(&server);
        assert_eq!(
            client.get_brightness().await.unwrap_err(),
            ClientError::BadStatus(500)
        );
        assert_eq!(
            client.set_tab(Tab::Audio).await.unwrap_err(),
            ClientError::BadStatus(204)
        );
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/brightness"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_brightness().await.unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn closed_port_is_network_error() {
        let client = HttpConfig::new("127.0.0.1")
            .with_port(closed_port())
            .with_timeout(Duration::from_secs(2))
            .into_client()
            .unwrap();

        let err = client.get_tab().await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)), "got {err:?}");
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn response_inside_timeout_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/brightness"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"brightness": 30}))
                    .set_delay(Duration::from_millis(50)),
            )
            .mount(&server)
            .await;

        let client = config_for(&server)
            .with_timeout(Duration::from_millis(500))
            .into_client()
            .unwrap();
        assert_eq!(client.get_brightness().await.unwrap().value(), 30);
    }

    #[tokio::test]
    async fn response_past_timeout_is_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/brightness"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"brightness": 30}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = config_for(&server)
            .with_timeout(Duration::from_millis(200))
            .into_client()
            .unwrap();
        assert_eq!(
            client.get_brightness().await.unwrap_err(),
            ClientError::Timeout(200)
        );
    }
}

// ============================================================================
// Light Tests
// ============================================================================

mod light {
    use super::*;

    #[tokio::test]
    async fn host_204_round_trips_as_80() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/brightness/set"))
            .and(body_json(json!({"brightness": 80})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        mount_json(&server, "GET", "/api/brightness", json!({"brightness": 80})).await;

        let light = clock_for(&server).entities().light;
        let outcome = light
            .dispatch(EntityCommand::TurnOn {
                brightness: Some(HostBrightness::new(204)),
            })
            .await;
        assert_eq!(outcome, CommandOutcome::Applied);
        assert_eq!(light.brightness().value(), 80);

        light.update().await;
        assert_eq!(light.brightness().value(), 80);
        assert_eq!(light.host_brightness().value(), 204);
    }

    #[tokio::test]
    async fn every_canonical_level_polls_back_unchanged() {
        for level in [0_u8, 1, 33, 50, 99, 100] {
            let server = MockServer::start().await;
            mount_json(&server, "GET", "/api/brightness", json!({"brightness": level})).await;

            let light = clock_for(&server).entities().light;
            light.update().await;
            assert_eq!(light.brightness().value(), level);
            assert_eq!(light.host_brightness().to_canonical().value(), level);
        }
    }

    #[tokio::test]
    async fn turn_on_without_brightness_is_full() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/brightness/set"))
            .and(body_json(json!({"brightness": 100})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let light = clock_for(&server).entities().light;
        assert!(light.turn_on(None).await.is_applied());
        assert_eq!(light.brightness(), Brightness::MAX);
    }

    #[tokio::test]
    async fn turn_off_sends_zero() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/brightness/set"))
            .and(body_json(json!({"brightness": 0})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let light = clock_for(&server).entities().light;
        assert!(light.dispatch(EntityCommand::TurnOff).await.is_applied());
        assert!(!light.is_on());
    }

    #[tokio::test]
    async fn failed_command_keeps_state() {
        let server = MockServer::start().await;
        mount_status(&server, "POST", "/api/brightness/set", 500).await;

        let light = clock_for(&server).entities().light;
        let before = light.brightness();
        let outcome = light.turn_off().await;
        assert_eq!(outcome, CommandOutcome::Failed(ClientError::BadStatus(500)));
        assert_eq!(light.brightness(), before);
    }

    #[tokio::test]
    async fn failed_poll_keeps_state() {
        let server = MockServer::start().await;
        mount_status(&server, "GET", "/api/brightness", 503).await;

        let light = clock_for(&server).entities().light;
        let outcome = light.update().await;
        assert_eq!(outcome, PollOutcome::Stale(ClientError::BadStatus(503)));
        assert_eq!(light.brightness(), Brightness::MID);
    }

    #[tokio::test]
    async fn timed_out_command_keeps_state() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/brightness/set"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let clock = SmartClock::with_config(config_for(&server))
            .with_timeout(Duration::from_millis(200))
            .build_without_probe()
            .unwrap();
        let light = clock.entities().light;
        let outcome = light.set_brightness(Brightness::new(10).unwrap()).await;
        assert_eq!(outcome, CommandOutcome::Failed(ClientError::Timeout(200)));
        assert_eq!(light.brightness(), Brightness::MID);
    }

    #[tokio::test]
    async fn timed_out_poll_keeps_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/brightness"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"brightness": 10}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let clock = SmartClock::with_config(config_for(&server))
            .with_timeout(Duration::from_millis(200))
            .build_without_probe()
            .unwrap();
        let light = clock.entities().light;
        assert_eq!(
            light.update().await,
            PollOutcome::Stale(ClientError::Timeout(200))
        );
        assert_eq!(light.brightness(), Brightness::MID);
    }

    #[tokio::test]
    async fn negative_brightness_polls_as_off() {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/api/brightness", json!({"brightness": -5})).await;

        let light = clock_for(&server).entities().light;
        assert_eq!(light.update().await, PollOutcome::Updated { changed: true });
        assert_eq!(light.brightness(), Brightness::OFF);
        assert!(!light.is_on());
    }

    #[tokio::test]
    async fn non_numeric_brightness_polls_as_default() {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/api/brightness", json!({"brightness": "bright"})).await;

        let clock = clock_for(&server);
        clock
            .cache()
            .observe(EntityKind::Brightness, Brightness::MAX.into())
            .unwrap();
        let light = clock.entities().light;
        assert_eq!(light.update().await, PollOutcome::Updated { changed: true });
        assert_eq!(light.brightness(), Brightness::MID);
    }
}

// ============================================================================
// Tab Select Tests
// ============================================================================

mod tab_select {
    use super::*;

    #[tokio::test]
    async fn repeated_select_is_idempotent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tab/set"))
            .and(body_json(json!({"tab": "audio"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(2)
            .mount(&server)
            .await;

        let clock = clock_for(&server);
        let select = clock.entities().tab;
        assert!(select.select_option("audio").await.is_applied());
        let once = clock.snapshot();
        assert!(select.select_option("audio").await.is_applied());
        assert_eq!(clock.snapshot(), once);
        assert_eq!(select.current_option(), Tab::Audio);
    }

    #[tokio::test]
    async fn unknown_option_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tab/set"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let select = clock_for(&server).entities().tab;
        let outcome = select
            .dispatch(EntityCommand::SelectOption {
                option: "Audio".to_string(),
            })
            .await;
        assert!(matches!(outcome, CommandOutcome::Rejected(_)));
        assert_eq!(select.current_option(), Tab::Clock);
    }

    #[tokio::test]
    async fn failed_select_keeps_state() {
        let server = MockServer::start().await;
        mount_status(&server, "POST", "/api/tab/set", 404).await;

        let select = clock_for(&server).entities().tab;
        let outcome = select.select(Tab::Info).await;
        assert_eq!(outcome, CommandOutcome::Failed(ClientError::BadStatus(404)));
        assert_eq!(select.current_option(), Tab::Clock);
    }

    #[tokio::test]
    async fn poll_with_empty_body_reports_clock() {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/api/tab", json!({})).await;

        let clock = clock_for(&server);
        clock
            .cache()
            .observe(EntityKind::Tab, EntityState::TabSelection(Tab::Settings))
            .unwrap();
        let select = clock.entities().tab;
        assert_eq!(select.update().await, PollOutcome::Updated { changed: true });
        assert_eq!(select.current_option(), Tab::Clock);
    }

    #[tokio::test]
    async fn timed_out_poll_keeps_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tab"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"tab": "info"}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let clock = SmartClock::with_config(config_for(&server))
            .with_timeout(Duration::from_millis(200))
            .build_without_probe()
            .unwrap();
        clock
            .cache()
            .observe(EntityKind::Tab, EntityState::TabSelection(Tab::Audio))
            .unwrap();
        let select = clock.entities().tab;
        assert_eq!(
            select.update().await,
            PollOutcome::Stale(ClientError::Timeout(200))
        );
        assert_eq!(select.current_option(), Tab::Audio);
    }

    #[tokio::test]
    async fn overlapping_polls_are_skipped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tab"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"tab": "info"}))
                    .set_delay(Duration::from_millis(200)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let select = clock_for(&server).entities().tab;
        let (first, second) = tokio::join!(select.update(), select.update());
        assert_eq!(first, PollOutcome::Updated { changed: true });
        assert_eq!(second, PollOutcome::Skipped);
        assert_eq!(select.current_option(), Tab::Info);
    }
}

// ============================================================================
// Button Tests
// ============================================================================

mod button {
    use super::*;

    #[tokio::test]
    async fn press_sends_refresh() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/refresh"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let button = clock_for(&server).entities().refresh;
        assert!(button.dispatch(EntityCommand::Press).await.is_applied());
    }

    #[tokio::test]
    async fn press_failure_is_reported() {
        let server = MockServer::start().await;
        mount_status(&server, "POST", "/api/refresh", 500).await;

        let button = clock_for(&server).entities().refresh;
        assert_eq!(
            button.press().await,
            CommandOutcome::Failed(ClientError::BadStatus(500))
        );
    }
}

// ============================================================================
// Sensor Tests
// ============================================================================

mod sensors {
    use super::*;

    #[tokio::test]
    async fn running_snapclient() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "GET",
            "/api/snap/status",
            json!({"running": true, "message": "playing"}),
        )
        .await;

        let sensor = clock_for(&server).entities().snap_status;
        sensor.update().await;
        assert_eq!(sensor.state(), BinaryStatus::Running);
        assert_eq!(sensor.message().as_deref(), Some("playing"));
    }

    #[tokio::test]
    async fn stopped_snapclient() {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/api/snap/status", json!({"running": false})).await;

        let sensor = clock_for(&server).entities().snap_status;
        sensor.update().await;
        assert_eq!(sensor.state(), BinaryStatus::Stopped);
    }

    #[tokio::test]
    async fn server_error_is_error() {
        let server = MockServer::start().await;
        mount_status(&server, "GET", "/api/snap/status", 500).await;

        let sensor = clock_for(&server).entities().snap_status;
        let outcome = sensor.update().await;
        assert_eq!(
            outcome,
            PollOutcome::Degraded {
                status: BinaryStatus::Error,
                error: ClientError::BadStatus(500),
            }
        );
        assert_eq!(sensor.state(), BinaryStatus::Error);
    }

    #[tokio::test]
    async fn malformed_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/snap/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("running"))
            .mount(&server)
            .await;

        let sensor = clock_for(&server).entities().snap_status;
        sensor.update().await;
        assert_eq!(sensor.state(), BinaryStatus::Error);
    }

    #[tokio::test]
    async fn unreachable_device_is_unavailable() {
        let clock = SmartClock::http("127.0.0.1")
            .with_port(closed_port())
            .with_timeout(Duration::from_secs(2))
            .build_without_probe()
            .unwrap();

        let sensor = clock.entities().snap_status;
        let outcome = sensor.update().await;
        assert!(matches!(
            outcome,
            PollOutcome::Degraded {
                status: BinaryStatus::Unavailable,
                ..
            }
        ));
        assert_eq!(sensor.state(), BinaryStatus::Unavailable);
    }

    #[tokio::test]
    async fn timed_out_poll_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/snap/status"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"running": true}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let clock = SmartClock::with_config(config_for(&server))
            .with_timeout(Duration::from_millis(200))
            .build_without_probe()
            .unwrap();
        let sensor = clock.entities().snap_status;
        assert_eq!(
            sensor.update().await,
            PollOutcome::Degraded {
                status: BinaryStatus::Unavailable,
                error: ClientError::Timeout(200),
            }
        );
        assert_eq!(sensor.state(), BinaryStatus::Unavailable);
    }

    #[tokio::test]
    async fn truthy_running_value_is_running() {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/api/snap/status", json!({"running": 1})).await;

        let sensor = clock_for(&server).entities().snap_status;
        assert_eq!(sensor.update().await, PollOutcome::Updated { changed: true });
        assert_eq!(sensor.state(), BinaryStatus::Running);
    }

    #[tokio::test]
    async fn recovers_after_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/snap/status"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_json(&server, "GET", "/api/snap/status", json!({"running": true})).await;

        let sensor = clock_for(&server).entities().snap_status;
        sensor.update().await;
        assert_eq!(sensor.state(), BinaryStatus::Error);
        sensor.update().await;
        assert_eq!(sensor.state(), BinaryStatus::Running);
    }
}

// ============================================================================
// Poll Cycle Tests
// ============================================================================

mod poll_cycle {
    use super::*;

    #[tokio::test]
    async fn refreshes_every_entity() {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/api/brightness", json!({"brightness": 75})).await;
        mount_json(&server, "GET", "/api/tab", json!({"tab": "settings"})).await;
        mount_json(&server, "GET", "/api/snap/status", json!({"running": true})).await;

        let clock = clock_for(&server);
        let report = clock.poll_scheduler().poll_cycle().await;
        assert!(report.is_clean());
        assert_eq!(report.changed_count(), 4);

        let snapshot = clock.snapshot();
        assert_eq!(
            snapshot.get(EntityKind::Brightness),
            Some(EntityState::Brightness(Brightness::new(75).unwrap()))
        );
        assert_eq!(
            snapshot.get(EntityKind::Tab),
            Some(EntityState::TabSelection(Tab::Settings))
        );
        assert_eq!(
            snapshot.get(EntityKind::SnapStatus),
            Some(EntityState::BinaryStatus(BinaryStatus::Running))
        );
        assert_eq!(
            snapshot.get(EntityKind::AudioStream),
            Some(EntityState::BinaryStatus(BinaryStatus::Active))
        );
    }

    #[tokio::test]
    async fn failures_stay_per_entity() {
        let server = MockServer::start().await;
        mount_status(&server, "GET", "/api/brightness", 500).await;
        mount_json(&server, "GET", "/api/tab", json!({"tab": "audio"})).await;
        mount_status(&server, "GET", "/api/snap/status", 502).await;

        let clock = clock_for(&server);
        let report = clock.poll_scheduler().poll_cycle().await;

        assert_eq!(
            report.get(EntityKind::Brightness),
            Some(&PollOutcome::Stale(ClientError::BadStatus(500)))
        );
        assert_eq!(
            report.get(EntityKind::Tab),
            Some(&PollOutcome::Updated { changed: true })
        );
        assert_eq!(report.failures().count(), 2);
        assert_eq!(clock.cache().brightness(), Brightness::MID);
        assert_eq!(clock.cache().tab(), Tab::Audio);
        assert_eq!(clock.cache().status(EntityKind::SnapStatus), BinaryStatus::Error);
    }
}

// ============================================================================
// Setup Tests
// ============================================================================

mod setup {
    use super::*;

    #[tokio::test]
    async fn validate_reachable_device() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/brightness"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"brightness": 50})))
            .expect(1)
            .mount(&server)
            .await;

        let info = validate_input(&setup_input_for(&server)).await.unwrap();
        assert_eq!(info.title, "Smart Clock (127.0.0.1)");
    }

    #[tokio::test]
    async fn bad_status_cannot_connect() {
        let server = MockServer::start().await;
        mount_status(&server, "GET", "/api/brightness", 500).await;

        let err = validate_input(&setup_input_for(&server)).await.unwrap_err();
        assert_eq!(err.code(), "cannot_connect");
    }

    #[tokio::test]
    async fn unreachable_cannot_connect() {
        let input = SetupInput::new("127.0.0.1").with_port(closed_port());
        let err = validate_input(&input).await.unwrap_err();
        assert_eq!(err.code(), "cannot_connect");
    }

    #[tokio::test]
    async fn non_json_is_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/brightness"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .mount(&server)
            .await;

        let err = validate_input(&setup_input_for(&server)).await.unwrap_err();
        assert_eq!(err.code(), "unknown");
    }

    #[tokio::test]
    async fn any_json_body_is_accepted() {
        for body in [
            json!({"brightness": -5}),
            json!({"running": 1}),
            json!({"brightness": "bright"}),
        ] {
            let server = MockServer::start().await;
            mount_json(&server, "GET", "/api/brightness", body.clone()).await;

            let result = validate_input(&setup_input_for(&server)).await;
            assert!(result.is_ok(), "{body} => {result:?}");
        }
    }

    #[tokio::test]
    async fn build_accepts_negative_brightness() {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/api/brightness", json!({"brightness": -5})).await;

        let clock = SmartClock::with_config(config_for(&server)).build().await;
        assert!(clock.is_ok());
    }

    #[tokio::test]
    async fn flow_creates_entry() {
        let server = MockServer::start().await;
        mount_json(&server, "GET", "/api/brightness", json!({"brightness": 50})).await;

        let input = setup_input_for(&server);
        let result = ConfigFlow::new().step_user(Some(input.clone())).await;
        assert_eq!(
            result,
            FlowResult::CreateEntry {
                title: "Smart Clock (127.0.0.1)".to_string(),
                data: input,
            }
        );
    }

    #[tokio::test]
    async fn flow_shows_timeout_as_cannot_connect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/brightness"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let result = ConfigFlow::new()
            .with_timeout(Duration::from_millis(200))
            .step_user(Some(setup_input_for(&server)))
            .await;
        match result {
            FlowResult::ShowForm { errors } => {
                assert_eq!(errors.get("base").map(String::as_str), Some("cannot_connect"));
            }
            other => panic!("expected form, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn build_checks_reachability() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/brightness"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"brightness": 50})))
            .expect(1)
            .mount(&server)
            .await;

        let clock = SmartClock::from_setup(&setup_input_for(&server))
            .build()
            .await
            .unwrap();
        assert_eq!(clock.address().port(), server.address().port());
    }

    #[tokio::test]
    async fn build_fails_on_bad_status() {
        let server = MockServer::start().await;
        mount_status(&server, "GET", "/api/brightness", 503).await;

        let result = SmartClock::with_config(config_for(&server)).build().await;
        assert!(matches!(result, Err(Error::Setup(_))));
    }
}
